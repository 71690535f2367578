use sea_orm::entity::prelude::*;

/// Terminal billing artifact of a reservation, created once at check-out.
///
/// `reservation_id` is unique: a reservation can never be billed twice.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Sequential per calendar year, format `FAC-YYYY-NNNNNN`.
    #[sea_orm(unique)]
    pub invoice_number: String,
    #[sea_orm(unique)]
    pub reservation_id: i32,
    pub nights: i32,
    /// Nightly price read from the assigned room at check-out time.
    pub nightly_price: Decimal,
    pub total: Decimal,
    pub invoice_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id"
    )]
    Reservation,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
