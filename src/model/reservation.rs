//! Reservation DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    model::{
        client::{ClientContactDto, ClientDto},
        invoice::InvoiceDto,
        room::RoomDto,
    },
    server::model::reservation::{CheckoutOverview, ReservationDetails},
};

/// Answer to the availability question.
///
/// `nightly_price` is present exactly when `available` is true: the current
/// price of the room the engine would allocate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityDto {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nightly_price: Option<Decimal>,
}

/// Payload shared by the guest request and staff walk-in channels.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub arrival_date: NaiveDate,
    /// Exclusive end of the stay; must be strictly after `arrival_date`.
    pub departure_date: NaiveDate,
    pub party_size: i32,
    /// Wire value: `SINGLE`, `DOUBLE`, `TWIN`, or `FAMILY`.
    pub room_type: String,
    pub client: ClientContactDto,
}

/// A reservation as rendered to staff, with its related records joined.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    /// Fixed format `RES-YYYY-NNNNNN`.
    pub reservation_number: String,
    /// Wire value: `PENDING`, `CONFIRMED`, `CHECKED_IN`, `CHECKED_OUT`, or
    /// `CANCELLED`.
    pub status: String,
    /// Wire value: `ONLINE` or `WALK_IN`.
    pub channel: String,
    pub room_type: String,
    pub party_size: i32,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomDto>,
}

impl ReservationDto {
    /// Renders a bare reservation row without joined records.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            reservation_number: entity.reservation_number,
            status: entity.status.to_value(),
            channel: entity.channel.to_value(),
            room_type: entity.room_type.to_value(),
            party_size: entity.party_size,
            arrival_date: entity.arrival_date,
            departure_date: entity.departure_date,
            allocated_at: entity.allocated_at,
            created_at: entity.created_at,
            client: None,
            room: None,
        }
    }

    /// Renders a reservation with its joined client and room.
    pub fn from_details(details: ReservationDetails) -> Self {
        let mut dto = Self::from_entity(details.reservation);
        dto.client = details.client.map(ClientDto::from_entity);
        dto.room = details.room.map(RoomDto::from_entity);
        dto
    }
}

/// Reduced reservation view returned to the guest who requested the stay.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationSummaryDto {
    pub reservation_number: String,
    pub status: String,
    pub channel: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    /// Present once a room has been allocated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomDto>,
}

impl ReservationSummaryDto {
    pub fn from_details(details: ReservationDetails) -> Self {
        Self {
            reservation_number: details.reservation.reservation_number,
            status: details.reservation.status.to_value(),
            channel: details.reservation.channel.to_value(),
            arrival_date: details.reservation.arrival_date,
            departure_date: details.reservation.departure_date,
            room: details.room.map(RoomDto::from_entity),
        }
    }
}

/// A today-checkout row annotated with its invoice, if already issued.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutOverviewDto {
    #[serde(flatten)]
    pub reservation: ReservationDto,
    pub invoice_id: Option<i32>,
}

impl CheckoutOverviewDto {
    pub fn from_overview(overview: CheckoutOverview) -> Self {
        Self {
            reservation: ReservationDto::from_details(overview.details),
            invoice_id: overview.invoice_id,
        }
    }
}

/// Response of the check-out operation: the terminal reservation plus the
/// invoice it produced.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckOutResponseDto {
    pub reservation: ReservationDto,
    pub invoice: InvoiceDto,
}
