//! Reservation lifecycle state machine.
//!
//! The lifecycle is an explicit transition table over
//! (`ReservationStatus`, `ReservationEvent`) pairs, checked before any
//! persistence happens. Services apply an event through [`transition`] and
//! only write the new status when the table allows it, so a reservation can
//! never be observed half-transitioned.

use entity::enums::ReservationStatus;
use sea_orm::ActiveEnum;
use thiserror::Error;

/// An operation applied to a reservation by staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationEvent {
    Confirm,
    CheckIn,
    CheckOut,
    Cancel,
}

impl ReservationEvent {
    /// Human-readable event name used in rejection messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::CheckIn => "check-in",
            Self::CheckOut => "check-out",
            Self::Cancel => "cancel",
        }
    }
}

/// Rejection of an event that is illegal in the reservation's current status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot {} a reservation in status {}", event.name(), from.to_value())]
pub struct TransitionError {
    /// Status the reservation was in when the event arrived.
    pub from: ReservationStatus,
    /// Event that was rejected.
    pub event: ReservationEvent,
}

/// Applies an event to a status, returning the next status.
///
/// Legal transitions:
/// - `Pending` --confirm--> `Confirmed`
/// - `Confirmed` --check-in--> `CheckedIn`
/// - `CheckedIn` --check-out--> `CheckedOut` (terminal)
/// - `Pending` | `Confirmed` --cancel--> `Cancelled` (terminal)
///
/// Every other pair is rejected with a [`TransitionError`] naming both the
/// current status and the offending event.
pub fn transition(
    from: ReservationStatus,
    event: ReservationEvent,
) -> Result<ReservationStatus, TransitionError> {
    use ReservationEvent::*;
    use ReservationStatus::*;

    match (from, event) {
        (Pending, Confirm) => Ok(Confirmed),
        (Confirmed, CheckIn) => Ok(CheckedIn),
        (CheckedIn, CheckOut) => Ok(CheckedOut),
        (Pending, Cancel) | (Confirmed, Cancel) => Ok(Cancelled),
        (from, event) => Err(TransitionError { from, event }),
    }
}

/// Statuses that reserve a physical room against the calendar.
///
/// Only reservations in these statuses participate in allocation conflict
/// checks; pending, cancelled, and checked-out stays never block a room.
pub const OCCUPYING_STATUSES: [ReservationStatus; 2] =
    [ReservationStatus::Confirmed, ReservationStatus::CheckedIn];
