//! Room DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A room as rendered to API clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    /// Human-facing room number, unique across the hotel.
    pub number: String,
    /// Wire value: `SINGLE`, `DOUBLE`, `TWIN`, or `FAMILY`.
    pub room_type: String,
    pub capacity: i32,
    pub nightly_price: Decimal,
    /// Wire value: `AVAILABLE` or `MAINTENANCE`.
    pub state: String,
    pub created_at: DateTime<Utc>,
}

impl RoomDto {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            number: entity.number,
            room_type: entity.room_type.to_value(),
            capacity: entity.capacity,
            nightly_price: entity.nightly_price,
            state: entity.state.to_value(),
            created_at: entity.created_at,
        }
    }
}

/// Payload for creating a room.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRoomDto {
    pub number: String,
    pub room_type: String,
    pub capacity: i32,
    pub nightly_price: Decimal,
    /// Defaults to `AVAILABLE` when omitted.
    pub state: Option<String>,
}

/// Payload for a whitelisted-field room update; omitted fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRoomDto {
    pub number: Option<String>,
    pub room_type: Option<String>,
    pub capacity: Option<i32>,
    pub nightly_price: Option<Decimal>,
    pub state: Option<String>,
}

/// Payload for toggling just the operational state of a room.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SetRoomStateDto {
    pub state: String,
}
