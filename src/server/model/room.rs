//! Domain parameter types for room operations.

use entity::enums::{RoomState, RoomType};
use rust_decimal::Decimal;

/// Parameters for creating a room.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub number: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub nightly_price: Decimal,
    /// Defaults to `Available` when not supplied by the caller.
    pub state: RoomState,
}

/// Whitelisted field updates for a room; only provided fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParams {
    pub number: Option<String>,
    pub room_type: Option<RoomType>,
    pub capacity: Option<i32>,
    pub nightly_price: Option<Decimal>,
    pub state: Option<RoomState>,
}

/// Optional filters for room listings.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub room_type: Option<RoomType>,
    pub state: Option<RoomState>,
    pub min_capacity: Option<i32>,
}
