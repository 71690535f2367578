//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a pooled handle and the token verifier
//! holds only the decoding key and validation settings.

use sea_orm::DatabaseConnection;

use crate::server::middleware::auth::TokenVerifier;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifier for the externally-issued staff bearer tokens.
    pub token_verifier: TokenVerifier,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_verifier` - Bearer token verifier built from the shared secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, token_verifier: TokenVerifier) -> Self {
        Self { db, token_verifier }
    }
}
