//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD, conflict probes, number scans) for each aggregate in the
//! application. Repositories use SeaORM entity models internally; business
//! rules (lifecycle legality, validation, retry policy) live one layer up in
//! the services.

pub mod client;
pub mod invoice;
pub mod reservation;
pub mod room;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Returns true when `err` is a unique-constraint violation involving the
/// given column.
///
/// SQLite reports the offending column in the violation message
/// (`UNIQUE constraint failed: reservation.reservation_number`), which lets
/// the create retry loop distinguish a number collision, the only conflict
/// it may retry, from any other uniqueness failure.
pub fn is_unique_violation(err: &DbErr, column: &str) -> bool {
    matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(msg)) if msg.contains(column)
    )
}
