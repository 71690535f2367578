//! Invoice DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{model::reservation::ReservationDto, server::model::invoice::InvoiceDetails};

/// An invoice as rendered to staff.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvoiceDto {
    pub id: i32,
    /// Fixed format `FAC-YYYY-NNNNNN`.
    pub invoice_number: String,
    pub reservation_id: i32,
    pub nights: i32,
    /// Nightly price snapshot taken at check-out.
    pub nightly_price: Decimal,
    pub total: Decimal,
    pub invoice_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl InvoiceDto {
    pub fn from_entity(entity: entity::invoice::Model) -> Self {
        Self {
            id: entity.id,
            invoice_number: entity.invoice_number,
            reservation_id: entity.reservation_id,
            nights: entity.nights,
            nightly_price: entity.nightly_price,
            total: entity.total,
            invoice_date: entity.invoice_date,
            created_at: entity.created_at,
        }
    }
}

/// An invoice joined with the reservation it bills (which in turn carries
/// the client and room).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvoiceDetailsDto {
    #[serde(flatten)]
    pub invoice: InvoiceDto,
    pub reservation: ReservationDto,
}

impl InvoiceDetailsDto {
    pub fn from_details(details: InvoiceDetails) -> Self {
        let reservation = ReservationDto::from_details(
            crate::server::model::reservation::ReservationDetails {
                reservation: details.reservation,
                client: details.client,
                room: details.room,
            },
        );

        Self {
            invoice: InvoiceDto::from_entity(details.invoice),
            reservation,
        }
    }
}
