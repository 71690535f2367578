//! Invoice factory for creating test invoice entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invoices with customizable fields.
pub struct InvoiceFactory<'a> {
    db: &'a DatabaseConnection,
    invoice_number: String,
    reservation_id: i32,
    nights: i32,
    nightly_price: Decimal,
    invoice_date: DateTime<Utc>,
}

impl<'a> InvoiceFactory<'a> {
    /// Creates a new InvoiceFactory with default values.
    ///
    /// Defaults:
    /// - invoice_number: `"FAC-{current year}-{id:06}"` with an
    ///   auto-incremented id (unique but not sequential)
    /// - nights: `1`
    /// - nightly_price: `80`
    /// - invoice_date: now
    ///
    /// The total is always computed as `nights × nightly_price` at build time.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `reservation_id` - Reservation this invoice bills
    ///
    /// # Returns
    /// - `InvoiceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            invoice_number: format!("FAC-{}-{:06}", Utc::now().year(), id),
            reservation_id,
            nights: 1,
            nightly_price: Decimal::from(80),
            invoice_date: Utc::now(),
        }
    }

    /// Sets the human-readable invoice number.
    pub fn invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice_number = number.into();
        self
    }

    /// Sets the billed night count.
    pub fn nights(mut self, nights: i32) -> Self {
        self.nights = nights;
        self
    }

    /// Sets the nightly price snapshot.
    pub fn nightly_price(mut self, nightly_price: Decimal) -> Self {
        self.nightly_price = nightly_price;
        self
    }

    /// Sets the invoice date.
    pub fn invoice_date(mut self, invoice_date: DateTime<Utc>) -> Self {
        self.invoice_date = invoice_date;
        self
    }

    /// Builds and inserts the invoice entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::invoice::Model)` - Created invoice entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::invoice::Model, DbErr> {
        entity::invoice::ActiveModel {
            id: ActiveValue::NotSet,
            invoice_number: ActiveValue::Set(self.invoice_number),
            reservation_id: ActiveValue::Set(self.reservation_id),
            nights: ActiveValue::Set(self.nights),
            nightly_price: ActiveValue::Set(self.nightly_price),
            total: ActiveValue::Set(Decimal::from(self.nights) * self.nightly_price),
            invoice_date: ActiveValue::Set(self.invoice_date),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an invoice with default values for the given reservation.
///
/// Shorthand for `InvoiceFactory::new(db, reservation_id).build()`.
///
/// # Arguments
/// - `db` - Database connection
/// - `reservation_id` - Reservation this invoice bills
///
/// # Returns
/// - `Ok(entity::invoice::Model)` - Created invoice entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_invoice(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::invoice::Model, DbErr> {
    InvoiceFactory::new(db, reservation_id).build().await
}
