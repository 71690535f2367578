use sea_orm::entity::prelude::*;

use super::enums::DocumentType;

/// A hotel client, keyed naturally by (document_type, document_number).
///
/// The composite natural key carries a unique index; contact fields are
/// overwritten in place on repeated submissions for the same document.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub document_type: DocumentType,
    pub document_number: String,
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
