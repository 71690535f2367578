//! Invoice issuance and read-side views.
//!
//! Issuance happens exactly once per reservation, only from the check-out
//! transition. The schema's unique index on `reservation_id` turns a second
//! attempt into a conflict rather than a duplicate bill. The nightly price
//! is read from the assigned room at check-out time, so rate changes between
//! booking and departure bill at the current rate.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        client::ClientRepository, invoice::InvoiceRepository, is_unique_violation,
        reservation::ReservationRepository, room::RoomRepository,
    },
    error::AppError,
    model::invoice::{InvoiceDetails, InvoiceFilter},
    service::numbering::{NumberingService, NumberKind},
};

/// Attempts allowed when a generated invoice number collides with a
/// concurrently-issued one before issuance is reported as a conflict.
const MAX_NUMBER_ATTEMPTS: u32 = 5;

pub struct InvoiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues the invoice for a reservation being checked out.
    ///
    /// Total is `nights × nightly_price`. The invoice number comes from the
    /// yearly `FAC-` sequence, retried with a fresh number when the unique
    /// index reports a collision; a violation of the one-invoice-per-
    /// reservation index is surfaced as a conflict immediately.
    ///
    /// # Arguments
    /// - `reservation_id`: Reservation being billed
    /// - `nights`: Billed night count (≥ 1, computed by the caller)
    /// - `nightly_price`: Current price of the assigned room
    ///
    /// # Returns
    /// - `Ok(Model)`: The created invoice
    /// - `Err(AppError::Conflict)`: Reservation already invoiced, or number retries exhausted
    /// - `Err(AppError)`: Database error
    pub async fn issue(
        &self,
        reservation_id: i32,
        nights: i32,
        nightly_price: Decimal,
    ) -> Result<entity::invoice::Model, AppError> {
        let repo = InvoiceRepository::new(self.db);
        let numbering = NumberingService::new(self.db);

        let total = Decimal::from(nights) * nightly_price;
        let year = Utc::now().year();

        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            let invoice_number = numbering.next_number(NumberKind::Invoice, year).await?;

            let result = repo
                .insert(
                    invoice_number,
                    reservation_id,
                    nights,
                    nightly_price,
                    total,
                    Utc::now(),
                )
                .await;

            match result {
                Ok(invoice) => return Ok(invoice),
                Err(err) if is_unique_violation(&err, "invoice_number") => {
                    if attempt == MAX_NUMBER_ATTEMPTS {
                        return Err(AppError::Conflict(
                            "invoice number already in use, please retry".to_string(),
                        ));
                    }
                    tracing::debug!(attempt, "invoice number collision, regenerating");
                }
                Err(err) if is_unique_violation(&err, "reservation_id") => {
                    return Err(AppError::Conflict(
                        "an invoice already exists for this reservation".to_string(),
                    ));
                }
                Err(err) => return Err(err.into()),
            }
        }

        unreachable!("retry loop returns on success, exhaustion, or error")
    }

    /// Gets an invoice joined with its reservation, client, and room.
    ///
    /// # Returns
    /// - `Ok(InvoiceDetails)`: The invoice with related records
    /// - `Err(AppError::NotFound)`: Unknown invoice ID
    pub async fn get_details(&self, id: i32) -> Result<InvoiceDetails, AppError> {
        let invoice = InvoiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

        self.attach_details(invoice).await
    }

    /// Lists invoices matching the filter, newest created first, each joined
    /// with its reservation, client, and room.
    ///
    /// Date-range and invoice-number filters are pushed into the query;
    /// reservation-number and client-name filters apply to the joined
    /// records after loading, mirroring how the read side has always
    /// behaved.
    pub async fn list(&self, filter: InvoiceFilter) -> Result<Vec<InvoiceDetails>, AppError> {
        let invoices = InvoiceRepository::new(self.db)
            .list(filter.from, filter.to, filter.invoice_number.as_deref())
            .await?;

        let mut details = Vec::with_capacity(invoices.len());
        for invoice in invoices {
            details.push(self.attach_details(invoice).await?);
        }

        if let Some(needle) = normalized(filter.reservation_number.as_deref()) {
            details.retain(|d| d.reservation.reservation_number.to_lowercase().contains(&needle));
        }

        if let Some(needle) = normalized(filter.client_name.as_deref()) {
            details.retain(|d| {
                d.client
                    .as_ref()
                    .is_some_and(|c| c.full_name.to_lowercase().contains(&needle))
            });
        }

        Ok(details)
    }

    async fn attach_details(&self, invoice: entity::invoice::Model) -> Result<InvoiceDetails, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(invoice.reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Billed reservation not found".to_string()))?;

        let client = ClientRepository::new(self.db)
            .find_by_id(reservation.client_id)
            .await?;

        let room = match reservation.room_id {
            Some(room_id) => RoomRepository::new(self.db).find_by_id(room_id).await?,
            None => None,
        };

        Ok(InvoiceDetails {
            invoice,
            reservation,
            client,
            room,
        })
    }
}

fn normalized(filter: Option<&str>) -> Option<String> {
    filter
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}
