//! Room allocation engine.
//!
//! Given a validated stay request, finds a currently-available,
//! conflict-free room or reports that none exists. "None exists" is a
//! normal negative outcome, never an error; callers decide whether it
//! becomes a 409 or a plain `available: false`.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    model::reservation::StayRequest,
};

pub struct AllocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AllocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the first conflict-free room satisfying the stay request.
    ///
    /// Candidates are rooms of the requested type with capacity for the
    /// party that are currently `Available`, scanned in ascending room-number
    /// order so the lowest number deterministically wins ties. Each candidate
    /// is probed for an occupying reservation (Confirmed or CheckedIn) whose
    /// half-open interval overlaps the requested one; the first candidate
    /// with no conflict is returned.
    ///
    /// The probe runs per candidate, one query each. At hotel scale that is
    /// fine; batching the probes into a single anti-join is the known rewrite
    /// if the room count ever makes this hot.
    ///
    /// # Arguments
    /// - `stay`: Validated stay request (type, party size, half-open dates)
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The allocated candidate
    /// - `Ok(None)`: No qualifying room exists for the interval
    /// - `Err(DbErr)`: Database error
    pub async fn find_available_room(
        &self,
        stay: &StayRequest,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let rooms = RoomRepository::new(self.db);
        let reservations = ReservationRepository::new(self.db);

        let candidates = rooms
            .find_candidates(stay.room_type, stay.party_size)
            .await?;

        for room in candidates {
            let conflict = reservations
                .has_conflict(room.id, stay.arrival_date, stay.departure_date)
                .await?;

            if !conflict {
                return Ok(Some(room));
            }
        }

        Ok(None)
    }
}
