use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was present on a
    /// staff-only endpoint. Results in 401 Unauthorized.
    #[error("no bearer token provided")]
    MissingToken,

    /// The bearer token failed signature or structural validation.
    /// Results in 401 Unauthorized.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The bearer token is past its expiry claim. Results in 401 Unauthorized.
    #[error("token expired")]
    ExpiredToken,

    /// The token verified but carries a role claim outside the closed role
    /// set. Results in 401 Unauthorized; the unknown claim is logged, not
    /// echoed back.
    #[error("unknown role claim: {0}")]
    UnknownRole(String),

    /// The caller's role is not in the allowed set for this operation.
    /// Results in 403 Forbidden.
    #[error("role {0} is not allowed to perform this operation")]
    Forbidden(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems (missing, invalid, expired, unknown role) map to 401 with a
/// uniform body so callers cannot distinguish why verification failed;
/// the specific cause is logged at debug level. An authenticated caller with
/// an insufficient role gets 403.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Forbidden(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden: insufficient role".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::debug!("authentication rejected: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid or expired token".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
