//! Parsing helpers for enum-valued request fields.
//!
//! Wire values arrive as strings; these helpers normalize case and map
//! unknown values to a 400 rather than a 500.

use entity::enums::{DocumentType, ReservationChannel, ReservationStatus, RoomState, RoomType};
use sea_orm::ActiveEnum;

use crate::server::error::AppError;

/// Parses a room type wire value (`SINGLE`, `DOUBLE`, `TWIN`, `FAMILY`).
///
/// # Returns
/// - `Ok(RoomType)` - Recognized value, case-insensitive
/// - `Err(AppError::BadRequest)` - Unknown value
pub fn parse_room_type(value: &str) -> Result<RoomType, AppError> {
    RoomType::try_from_value(&value.trim().to_uppercase())
        .map_err(|_| AppError::BadRequest(format!("unknown room type: {}", value)))
}

/// Parses a room state wire value (`AVAILABLE`, `MAINTENANCE`).
pub fn parse_room_state(value: &str) -> Result<RoomState, AppError> {
    RoomState::try_from_value(&value.trim().to_uppercase())
        .map_err(|_| AppError::BadRequest(format!("unknown room state: {}", value)))
}

/// Parses an identity document type wire value (`NATIONAL_ID`, `PASSPORT`).
pub fn parse_document_type(value: &str) -> Result<DocumentType, AppError> {
    DocumentType::try_from_value(&value.trim().to_uppercase())
        .map_err(|_| AppError::BadRequest(format!("unknown document type: {}", value)))
}

/// Parses a reservation status wire value (`PENDING`, `CONFIRMED`, ...).
pub fn parse_reservation_status(value: &str) -> Result<ReservationStatus, AppError> {
    ReservationStatus::try_from_value(&value.trim().to_uppercase())
        .map_err(|_| AppError::BadRequest(format!("unknown reservation status: {}", value)))
}

/// Parses a reservation channel wire value (`ONLINE`, `WALK_IN`).
pub fn parse_channel(value: &str) -> Result<ReservationChannel, AppError> {
    ReservationChannel::try_from_value(&value.trim().to_uppercase())
        .map_err(|_| AppError::BadRequest(format!("unknown channel: {}", value)))
}
