//! Domain parameter types for invoice operations.

use chrono::NaiveDate;

/// An invoice joined with the reservation it bills and that reservation's
/// client and room.
#[derive(Debug, Clone)]
pub struct InvoiceDetails {
    pub invoice: entity::invoice::Model,
    pub reservation: entity::reservation::Model,
    pub client: Option<entity::client::Model>,
    pub room: Option<entity::room::Model>,
}

/// Optional filters for invoice listings.
///
/// `invoice_number`, `reservation_number` and `client_name` are
/// case-insensitive substring matches.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub invoice_number: Option<String>,
    pub reservation_number: Option<String>,
    pub client_name: Option<String>,
}
