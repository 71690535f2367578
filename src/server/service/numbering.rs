//! Sequential human-readable document numbers.
//!
//! Reservations and invoices carry numbers of the fixed shapes
//! `RES-YYYY-NNNNNN` and `FAC-YYYY-NNNNNN`: sequential within a calendar
//! year, restarting at 000001 each new year, independently per kind. The
//! formats are load-bearing; existing records and reports parse them.
//!
//! Generation scans for the highest existing number under the year's prefix
//! and increments it. That read-then-write pattern is racy under concurrent
//! creation; the mitigation lives at the call sites, which retry a bounded
//! number of times when the insert trips the unique index on the number
//! column. It is deliberately not hidden in here.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::data::{invoice::InvoiceRepository, reservation::ReservationRepository};

/// Which yearly sequence a number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Reservation,
    Invoice,
}

impl NumberKind {
    /// Document prefix, `RES` for reservations and `FAC` for invoices.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Reservation => "RES",
            Self::Invoice => "FAC",
        }
    }
}

/// Builds the full number string for a kind, year, and sequence value.
pub fn format_number(kind: NumberKind, year: i32, seq: u32) -> String {
    format!("{}-{}-{:06}", kind.prefix(), year, seq)
}

/// Extracts the numeric suffix from a number carrying the given prefix.
///
/// Returns `None` when the prefix does not match or the suffix is not
/// numeric, in which case the sequence restarts at 1 (matching the original
/// system's tolerance for malformed legacy rows).
fn parse_sequence(number: &str, prefix: &str) -> Option<u32> {
    number.strip_prefix(prefix)?.parse().ok()
}

pub struct NumberingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NumberingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates the next number in the given kind's sequence for a year.
    ///
    /// Scans the store for the highest existing number under
    /// `<PREFIX>-<year>-` and increments its suffix; an empty year starts at
    /// `000001`.
    ///
    /// # Arguments
    /// - `kind`: Which sequence (reservation or invoice)
    /// - `year`: Calendar year the number belongs to
    ///
    /// # Returns
    /// - `Ok(String)`: The next number, e.g. `RES-2025-000043`
    /// - `Err(DbErr)`: Database error during the scan
    pub async fn next_number(&self, kind: NumberKind, year: i32) -> Result<String, DbErr> {
        let prefix = format!("{}-{}-", kind.prefix(), year);

        let last = match kind {
            NumberKind::Reservation => {
                ReservationRepository::new(self.db)
                    .last_number_with_prefix(&prefix)
                    .await?
            }
            NumberKind::Invoice => {
                InvoiceRepository::new(self.db)
                    .last_number_with_prefix(&prefix)
                    .await?
            }
        };

        let next = last
            .and_then(|number| parse_sequence(&number, &prefix))
            .map_or(1, |seq| seq + 1);

        Ok(format_number(kind, year, next))
    }
}
