use sea_orm::entity::prelude::*;

use super::enums::{RoomState, RoomType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human-facing room number, unique across the hotel.
    #[sea_orm(unique)]
    pub number: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub nightly_price: Decimal,
    pub state: RoomState,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
