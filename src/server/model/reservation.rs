//! Domain models and parameter types for reservation operations.

use chrono::NaiveDate;
use entity::enums::{ReservationChannel, ReservationStatus, RoomType};

use crate::server::error::AppError;

/// A validated stay request: what the guest wants, independent of any room.
///
/// Construction through [`StayRequest::new`] enforces the date-ordering and
/// party-size invariants before anything touches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRequest {
    pub room_type: RoomType,
    pub party_size: i32,
    pub arrival_date: NaiveDate,
    /// Exclusive end of the stay interval.
    pub departure_date: NaiveDate,
}

impl StayRequest {
    /// Validates and builds a stay request.
    ///
    /// # Returns
    /// - `Ok(StayRequest)` - Dates are strictly ordered and the party size is positive
    /// - `Err(AppError::BadRequest)` - departure ≤ arrival, or party_size < 1
    pub fn new(
        room_type: RoomType,
        party_size: i32,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
    ) -> Result<Self, AppError> {
        if departure_date <= arrival_date {
            return Err(AppError::BadRequest(
                "departure date must be strictly after arrival date".to_string(),
            ));
        }
        if party_size < 1 {
            return Err(AppError::BadRequest(
                "party size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            room_type,
            party_size,
            arrival_date,
            departure_date,
        })
    }
}

/// Parameters for persisting a new reservation row.
///
/// The reservation number is supplied by the caller so the create retry loop
/// can regenerate it between attempts.
#[derive(Debug, Clone)]
pub struct InsertReservationParams {
    pub reservation_number: String,
    pub client_id: i32,
    pub stay: StayRequest,
    pub channel: ReservationChannel,
    pub status: ReservationStatus,
    pub room_id: Option<i32>,
    pub allocated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Optional filters for reservation listings.
///
/// `from`/`to` bound the arrival date (inclusive on both ends).
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    pub channel: Option<ReservationChannel>,
    pub room_type: Option<RoomType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// A reservation joined with its owning client and assigned room.
#[derive(Debug, Clone)]
pub struct ReservationDetails {
    pub reservation: entity::reservation::Model,
    pub client: Option<entity::client::Model>,
    pub room: Option<entity::room::Model>,
}

/// A today-checkout row annotated with the invoice it produced, if any.
#[derive(Debug, Clone)]
pub struct CheckoutOverview {
    pub details: ReservationDetails,
    pub invoice_id: Option<i32>,
}
