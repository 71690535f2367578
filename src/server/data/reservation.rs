use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    lifecycle::OCCUPYING_STATUSES,
    reservation::{InsertReservationParams, ReservationFilter},
};
use entity::enums::{ReservationChannel, ReservationStatus};

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new reservation row.
    ///
    /// The unique index on `reservation_number` is the backstop for the
    /// numbering race; callers classify the resulting `DbErr` to decide
    /// whether a retry with a fresh number is warranted.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created reservation
    /// - `Err(DbErr)`: Database error, including number collisions
    pub async fn insert(
        &self,
        params: InsertReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            reservation_number: ActiveValue::Set(params.reservation_number),
            client_id: ActiveValue::Set(params.client_id),
            arrival_date: ActiveValue::Set(params.stay.arrival_date),
            departure_date: ActiveValue::Set(params.stay.departure_date),
            party_size: ActiveValue::Set(params.stay.party_size),
            room_type: ActiveValue::Set(params.stay.room_type),
            channel: ActiveValue::Set(params.channel),
            status: ActiveValue::Set(params.status),
            room_id: ActiveValue::Set(params.room_id),
            allocated_at: ActiveValue::Set(params.allocated_at),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets a reservation by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id).one(self.db).await
    }

    /// Checks whether a room has an occupying reservation overlapping the
    /// given half-open interval.
    ///
    /// Overlap uses half-open semantics, `existing.arrival <
    /// requested.departure AND existing.departure > requested.arrival`, so
    /// back-to-back stays (one departure equal to the next arrival) never
    /// conflict. Only occupying statuses (Confirmed, CheckedIn) block.
    ///
    /// # Arguments
    /// - `room_id`: Candidate room
    /// - `arrival`: Requested arrival date (inclusive)
    /// - `departure`: Requested departure date (exclusive)
    ///
    /// # Returns
    /// - `Ok(true)`: A conflicting reservation exists
    /// - `Ok(false)`: The room is free for the interval
    /// - `Err(DbErr)`: Database error
    pub async fn has_conflict(
        &self,
        room_id: i32,
        arrival: NaiveDate,
        departure: NaiveDate,
    ) -> Result<bool, DbErr> {
        let conflicts = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(entity::reservation::Column::Status.is_in(OCCUPYING_STATUSES))
            .filter(entity::reservation::Column::ArrivalDate.lt(departure))
            .filter(entity::reservation::Column::DepartureDate.gt(arrival))
            .count(self.db)
            .await?;

        Ok(conflicts > 0)
    }

    /// Lists reservations matching the filter, newest created first.
    pub async fn list(
        &self,
        filter: ReservationFilter,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::reservation::Column::Status.eq(status));
        }
        if let Some(channel) = filter.channel {
            query = query.filter(entity::reservation::Column::Channel.eq(channel));
        }
        if let Some(room_type) = filter.room_type {
            query = query.filter(entity::reservation::Column::RoomType.eq(room_type));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::reservation::Column::ArrivalDate.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::reservation::Column::ArrivalDate.lte(to));
        }

        query
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists pending online requests awaiting staff action, newest first.
    pub async fn list_pending(&self) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Pending))
            .filter(entity::reservation::Column::Channel.eq(ReservationChannel::Online))
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists confirmed reservations arriving on the given day, earliest
    /// arrival first.
    pub async fn list_arrivals_on(
        &self,
        day: NaiveDate,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Confirmed))
            .filter(entity::reservation::Column::ArrivalDate.eq(day))
            .order_by_asc(entity::reservation::Column::ArrivalDate)
            .all(self.db)
            .await
    }

    /// Lists reservations departing on the given day that are confirmed,
    /// in-house, or already checked out.
    pub async fn list_departures_on(
        &self,
        day: NaiveDate,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::DepartureDate.eq(day))
            .filter(entity::reservation::Column::Status.is_in([
                ReservationStatus::Confirmed,
                ReservationStatus::CheckedIn,
                ReservationStatus::CheckedOut,
            ]))
            .order_by_asc(entity::reservation::Column::DepartureDate)
            .all(self.db)
            .await
    }

    /// Returns the lexicographically-highest reservation number starting
    /// with the given prefix, if any.
    ///
    /// Zero-padded 6-digit suffixes make lexicographic and numeric order
    /// agree, which is what the numbering scan relies on.
    pub async fn last_number_with_prefix(&self, prefix: &str) -> Result<Option<String>, DbErr> {
        let last = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ReservationNumber.starts_with(prefix))
            .order_by_desc(entity::reservation::Column::ReservationNumber)
            .limit(1)
            .one(self.db)
            .await?;

        Ok(last.map(|r| r.reservation_number))
    }

    /// Writes a status change, optionally binding a freshly allocated room.
    ///
    /// `allocation` carries `(room_id, allocated_at)` when the transition
    /// also assigns a room (confirmation, walk-in fallback at check-in).
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated reservation
    /// - `Err(DbErr)`: Database error
    pub async fn apply_transition(
        &self,
        reservation: entity::reservation::Model,
        status: ReservationStatus,
        allocation: Option<(i32, chrono::DateTime<chrono::Utc>)>,
    ) -> Result<entity::reservation::Model, DbErr> {
        let mut active: entity::reservation::ActiveModel = reservation.into();
        active.status = ActiveValue::Set(status);

        if let Some((room_id, allocated_at)) = allocation {
            active.room_id = ActiveValue::Set(Some(room_id));
            active.allocated_at = ActiveValue::Set(Some(allocated_at));
        }

        active.update(self.db).await
    }
}
