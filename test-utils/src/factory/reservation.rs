//! Reservation factory for creating test reservation entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use entity::enums::{ReservationChannel, ReservationStatus, RoomType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, client.id)
///     .dates("2025-06-10", "2025-06-15")
///     .status(ReservationStatus::Confirmed)
///     .room_id(Some(room.id))
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_number: String,
    client_id: i32,
    arrival_date: NaiveDate,
    departure_date: NaiveDate,
    party_size: i32,
    room_type: RoomType,
    channel: ReservationChannel,
    status: ReservationStatus,
    room_id: Option<i32>,
    allocated_at: Option<DateTime<Utc>>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - reservation_number: `"RES-{current year}-{id:06}"` with an
    ///   auto-incremented id (unique but not sequential)
    /// - arrival/departure: tomorrow → three days from now
    /// - party_size: `1`
    /// - room_type: `RoomType::Single`
    /// - channel: `ReservationChannel::Online`
    /// - status: `ReservationStatus::Pending`
    /// - room_id / allocated_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `client_id` - Owning client ID
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, client_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            reservation_number: format!("RES-{}-{:06}", today.year(), id),
            client_id,
            arrival_date: today + chrono::Duration::days(1),
            departure_date: today + chrono::Duration::days(3),
            party_size: 1,
            room_type: RoomType::Single,
            channel: ReservationChannel::Online,
            status: ReservationStatus::Pending,
            room_id: None,
            allocated_at: None,
        }
    }

    /// Sets the human-readable reservation number.
    pub fn reservation_number(mut self, number: impl Into<String>) -> Self {
        self.reservation_number = number.into();
        self
    }

    /// Sets the stay interval from `YYYY-MM-DD` literals.
    ///
    /// # Panics
    /// Panics on malformed dates; factory input is test-authored.
    pub fn dates(mut self, arrival: &str, departure: &str) -> Self {
        self.arrival_date = arrival.parse().expect("invalid arrival date literal");
        self.departure_date = departure.parse().expect("invalid departure date literal");
        self
    }

    /// Sets the party size.
    pub fn party_size(mut self, party_size: i32) -> Self {
        self.party_size = party_size;
        self
    }

    /// Sets the requested room type.
    pub fn room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    /// Sets the reservation channel.
    pub fn channel(mut self, channel: ReservationChannel) -> Self {
        self.channel = channel;
        self
    }

    /// Sets the reservation status.
    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the assigned room.
    pub fn room_id(mut self, room_id: Option<i32>) -> Self {
        self.room_id = room_id;
        self
    }

    /// Sets the allocation timestamp.
    pub fn allocated_at(mut self, allocated_at: Option<DateTime<Utc>>) -> Self {
        self.allocated_at = allocated_at;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            reservation_number: ActiveValue::Set(self.reservation_number),
            client_id: ActiveValue::Set(self.client_id),
            arrival_date: ActiveValue::Set(self.arrival_date),
            departure_date: ActiveValue::Set(self.departure_date),
            party_size: ActiveValue::Set(self.party_size),
            room_type: ActiveValue::Set(self.room_type),
            channel: ActiveValue::Set(self.channel),
            status: ActiveValue::Set(self.status),
            room_id: ActiveValue::Set(self.room_id),
            allocated_at: ActiveValue::Set(self.allocated_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending online reservation with default values.
///
/// Shorthand for `ReservationFactory::new(db, client_id).build()`.
///
/// # Arguments
/// - `db` - Database connection
/// - `client_id` - Owning client ID
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reservation(
    db: &DatabaseConnection,
    client_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, client_id).build().await
}
