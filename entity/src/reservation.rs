use sea_orm::entity::prelude::*;

use super::enums::{ReservationChannel, ReservationStatus, RoomType};

/// A stay reservation moving through the lifecycle
/// Pending → Confirmed → CheckedIn → CheckedOut (Cancelled from the first
/// two). `room_id` and `allocated_at` stay null until allocation binds the
/// reservation to a physical room.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Sequential per calendar year, format `RES-YYYY-NNNNNN`.
    #[sea_orm(unique)]
    pub reservation_number: String,
    pub client_id: i32,
    pub arrival_date: Date,
    /// Exclusive end of the stay interval; strictly after `arrival_date`.
    pub departure_date: Date,
    pub party_size: i32,
    pub room_type: RoomType,
    pub channel: ReservationChannel,
    pub status: ReservationStatus,
    pub room_id: Option<i32>,
    pub allocated_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
    #[sea_orm(has_one = "super::invoice::Entity")]
    Invoice,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
