//! String-backed enums shared by the entity models.
//!
//! Values are stored as uppercase strings so existing records remain
//! readable in plain SQL and stable across enum reordering.

use sea_orm::entity::prelude::*;

/// Physical room category requested by a stay and carried by each room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RoomType {
    #[sea_orm(string_value = "SINGLE")]
    Single,
    #[sea_orm(string_value = "DOUBLE")]
    Double,
    #[sea_orm(string_value = "TWIN")]
    Twin,
    #[sea_orm(string_value = "FAMILY")]
    Family,
}

/// Operational state of a room. Only `Available` rooms are allocatable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RoomState {
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    #[sea_orm(string_value = "MAINTENANCE")]
    Maintenance,
}

/// Identity document kind forming the client natural key together with
/// the document number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum DocumentType {
    #[sea_orm(string_value = "NATIONAL_ID")]
    NationalId,
    #[sea_orm(string_value = "PASSPORT")]
    Passport,
}

/// Entry path of a reservation: guest self-service or staff walk-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ReservationChannel {
    #[sea_orm(string_value = "ONLINE")]
    Online,
    #[sea_orm(string_value = "WALK_IN")]
    WalkIn,
}

/// Lifecycle status of a reservation.
///
/// `Confirmed` and `CheckedIn` are the occupying statuses: they reserve a
/// physical room against the calendar and participate in conflict checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ReservationStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "CONFIRMED")]
    Confirmed,
    #[sea_orm(string_value = "CHECKED_IN")]
    CheckedIn,
    #[sea_orm(string_value = "CHECKED_OUT")]
    CheckedOut,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}
