use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct InvoiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new invoice row.
    ///
    /// Two unique indexes guard this insert: `invoice_number` (retried by
    /// the caller with a fresh number) and `reservation_id` (a second
    /// invoice for the same reservation is a hard conflict).
    ///
    /// # Returns
    /// - `Ok(Model)`: The created invoice
    /// - `Err(DbErr)`: Database error, including uniqueness violations
    pub async fn insert(
        &self,
        invoice_number: String,
        reservation_id: i32,
        nights: i32,
        nightly_price: Decimal,
        total: Decimal,
        invoice_date: DateTime<Utc>,
    ) -> Result<entity::invoice::Model, DbErr> {
        entity::invoice::ActiveModel {
            id: ActiveValue::NotSet,
            invoice_number: ActiveValue::Set(invoice_number),
            reservation_id: ActiveValue::Set(reservation_id),
            nights: ActiveValue::Set(nights),
            nightly_price: ActiveValue::Set(nightly_price),
            total: ActiveValue::Set(total),
            invoice_date: ActiveValue::Set(invoice_date),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets an invoice by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::invoice::Model>, DbErr> {
        entity::prelude::Invoice::find_by_id(id).one(self.db).await
    }

    /// Gets the invoice billing a reservation, if one has been issued.
    pub async fn find_by_reservation_id(
        &self,
        reservation_id: i32,
    ) -> Result<Option<entity::invoice::Model>, DbErr> {
        entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::ReservationId.eq(reservation_id))
            .one(self.db)
            .await
    }

    /// Maps reservation IDs to invoice IDs for the given reservations.
    ///
    /// Used by the today-checkouts view to annotate each departing stay with
    /// the invoice it produced, if any.
    pub async fn find_for_reservations(
        &self,
        reservation_ids: &[i32],
    ) -> Result<Vec<(i32, i32)>, DbErr> {
        if reservation_ids.is_empty() {
            return Ok(Vec::new());
        }

        let invoices = entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::ReservationId.is_in(reservation_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(invoices
            .into_iter()
            .map(|invoice| (invoice.reservation_id, invoice.id))
            .collect())
    }

    /// Lists invoices, newest created first, filtered by invoice-date range
    /// and invoice-number substring.
    ///
    /// # Arguments
    /// - `from`/`to`: Inclusive invoice-date bounds (whole days)
    /// - `invoice_number`: Optional substring of the invoice number
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Matching invoices
    /// - `Err(DbErr)`: Database error
    pub async fn list(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        invoice_number: Option<&str>,
    ) -> Result<Vec<entity::invoice::Model>, DbErr> {
        let mut query = entity::prelude::Invoice::find();

        if let Some(from) = from {
            let start = from.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
            query = query.filter(entity::invoice::Column::InvoiceDate.gte(start));
        }
        if let Some(to) = to {
            let end = to.and_hms_opt(23, 59, 59).unwrap_or_default().and_utc();
            query = query.filter(entity::invoice::Column::InvoiceDate.lte(end));
        }
        if let Some(number) = invoice_number.map(str::trim).filter(|n| !n.is_empty()) {
            query = query.filter(entity::invoice::Column::InvoiceNumber.contains(number));
        }

        query
            .order_by_desc(entity::invoice::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Returns the lexicographically-highest invoice number starting with
    /// the given prefix, if any.
    pub async fn last_number_with_prefix(&self, prefix: &str) -> Result<Option<String>, DbErr> {
        let last = entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::InvoiceNumber.starts_with(prefix))
            .order_by_desc(entity::invoice::Column::InvoiceNumber)
            .limit(1)
            .one(self.db)
            .await?;

        Ok(last.map(|i| i.invoice_number))
    }
}
