//! Bearer-token authentication guard.
//!
//! The identity store issuing tokens is external to this backend: staff log
//! in elsewhere and arrive carrying an HS256 JWT whose `role` claim names
//! one of the closed staff roles. This module verifies the token once at the
//! handler boundary and checks the caller's role against the allowed set for
//! the operation. Guest endpoints simply never invoke the guard.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Closed staff role set carried by the token's `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Receptionist,
    Administrator,
}

impl Role {
    /// Parses a role claim string; unknown claims are rejected, never
    /// defaulted.
    pub fn from_claim(claim: &str) -> Option<Self> {
        match claim {
            "RECEPTIONIST" => Some(Self::Receptionist),
            "ADMIN" => Some(Self::Administrator),
            _ => None,
        }
    }

    /// Wire value of the role claim.
    pub fn as_claim(&self) -> &'static str {
        match self {
            Self::Receptionist => "RECEPTIONIST",
            Self::Administrator => "ADMIN",
        }
    }
}

/// Capability sets per operation group.
///
/// The receptionist drives the reservation lifecycle; the administrator
/// manages rooms; both read clients, reservations, and invoices.
pub const STAFF: &[Role] = &[Role::Receptionist, Role::Administrator];
pub const RECEPTION: &[Role] = &[Role::Receptionist];
pub const ADMIN: &[Role] = &[Role::Administrator];

/// Claims embedded in the externally-issued staff token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Staff user id (subject) as assigned by the identity store.
    pub sub: String,
    pub email: String,
    /// Role claim string; parsed into [`Role`] during verification.
    pub role: String,
    /// Expiry timestamp (seconds since epoch).
    pub exp: i64,
}

/// An authenticated staff member, produced by token verification.
#[derive(Debug, Clone)]
pub struct StaffUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// Verifies externally-issued HS256 bearer tokens.
///
/// Built once at startup from the shared secret and cloned into the
/// application state.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier for tokens signed with the given shared secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies a raw token and resolves its role claim.
    ///
    /// # Returns
    /// - `Ok(StaffUser)` - Signature, expiry, and role claim all check out
    /// - `Err(AuthError)` - Expired, malformed, badly signed, or unknown role
    pub fn verify(&self, token: &str) -> Result<StaffUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        let claims = data.claims;
        let role =
            Role::from_claim(&claims.role).ok_or_else(|| AuthError::UnknownRole(claims.role.clone()))?;

        Ok(StaffUser {
            id: claims.sub,
            email: claims.email,
            role,
        })
    }
}

/// Per-request guard checked once at the top of each staff handler.
pub struct AuthGuard<'a> {
    verifier: &'a TokenVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(verifier: &'a TokenVerifier, headers: &'a HeaderMap) -> Self {
        Self { verifier, headers }
    }

    /// Extracts and verifies the bearer token, then checks the caller's role
    /// against the allowed set. An empty set means any authenticated staff
    /// member passes.
    ///
    /// # Returns
    /// - `Ok(StaffUser)` - Authenticated caller with a permitted role
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::Forbidden)` - Valid token, role not in `allowed`
    pub fn require(&self, allowed: &[Role]) -> Result<StaffUser, AuthError> {
        let header = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)?;

        let user = self.verifier.verify(token)?;

        if allowed.is_empty() || allowed.contains(&user.role) {
            Ok(user)
        } else {
            Err(AuthError::Forbidden(user.role.as_claim().to_string()))
        }
    }
}
