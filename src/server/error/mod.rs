//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError`
//! enum serves as the top-level error type that wraps domain-specific errors
//! and implements `IntoResponse` for automatic error handling in API
//! endpoints.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, config::ConfigError},
        model::lifecycle::TransitionError,
    },
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Variants follow the operational
/// taxonomy: validation failures reject before persistence, state-precondition
/// violations leave the reservation untouched, allocation failure and
/// uniqueness conflicts are negative outcomes rather than faults, and
/// everything unexpected collapses into a logged 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Illegal reservation lifecycle transition.
    ///
    /// Results in 400 Bad Request naming the current status and the rejected
    /// event. The reservation is left unchanged.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, rejected before any persistence attempt.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// No qualifying room exists for a stay that must be allocated now
    /// (walk-in creation, confirmation, check-in fallback allocation).
    ///
    /// Results in 409 Conflict. The availability check never raises this;
    /// it reports `available: false` instead.
    #[error("no room available for the requested stay")]
    NoRoomAvailable,

    /// Uniqueness conflict surfaced by the persistence layer (duplicate room
    /// number, client natural key collision, exhausted number retries,
    /// already-invoiced reservation).
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response
/// body. Authentication errors delegate to their own response handling.
/// Internal errors are logged with full details but return generic messages
/// to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `Transition` variants
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `NoRoomAvailable` and `Conflict` variants
/// - 500 Internal Server Error - For `DbErr` and `ConfigErr`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Transition(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::NoRoomAvailable => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "no room available for the requested stay".to_string(),
                }),
            )
                .into_response(),
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic "Internal server error"
/// message to the client to avoid leaking implementation details. Used as a
/// fallback for errors without specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
