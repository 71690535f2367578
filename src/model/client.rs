//! Client DTOs.

use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A client record as rendered to staff.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    /// Wire value: `NATIONAL_ID` or `PASSPORT`.
    pub document_type: String,
    pub document_number: String,
    pub created_at: DateTime<Utc>,
}

impl ClientDto {
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            phone: entity.phone,
            email: entity.email,
            document_type: entity.document_type.to_value(),
            document_number: entity.document_number,
            created_at: entity.created_at,
        }
    }
}

/// Client identity embedded in reservation creation payloads.
///
/// (document_type, document_number) is the natural key the registry upserts
/// on; contact fields refresh the stored record.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClientContactDto {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    /// Wire value: `NATIONAL_ID` or `PASSPORT`.
    pub document_type: String,
    pub document_number: String,
}
