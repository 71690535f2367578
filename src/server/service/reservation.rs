//! Reservation lifecycle orchestration.
//!
//! Owns the two creation channels (guest request and staff walk-in), the
//! staff transitions (confirm, check-in, check-out, cancel), and the staff
//! views over reservations. Lifecycle legality is delegated to the
//! transition table in `model::lifecycle`; room binding is delegated to the
//! allocation engine; numbers come from the numbering service with a bounded
//! retry when the unique index reports a collision.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        client::ClientRepository, invoice::InvoiceRepository, is_unique_violation,
        reservation::ReservationRepository, room::RoomRepository,
    },
    error::AppError,
    model::{
        client::UpsertClientParams,
        lifecycle::{transition, ReservationEvent},
        reservation::{
            CheckoutOverview, InsertReservationParams, ReservationDetails, ReservationFilter,
            StayRequest,
        },
    },
    service::{
        allocation::AllocationService,
        invoice::InvoiceService,
        numbering::{NumberingService, NumberKind},
    },
};
use entity::enums::{ReservationChannel, ReservationStatus};

/// Attempts allowed when a generated reservation number collides with a
/// concurrently-inserted one before the create is reported as a conflict.
const MAX_NUMBER_ATTEMPTS: u32 = 5;

/// Number of nights billed for a stay.
///
/// Dates are whole days (already midnight-normalized), so the difference is
/// exact; the result is floored at one night so same-day or inverted inputs
/// that slip past validation can never produce a zero or negative bill.
pub fn nights_between(arrival: NaiveDate, departure: NaiveDate) -> i64 {
    (departure - arrival).num_days().max(1)
}

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Answers the guest-facing availability question.
    ///
    /// # Returns
    /// - `Ok(Some(price))`: A room qualifies; its current nightly price
    /// - `Ok(None)`: No room available, a normal negative answer
    /// - `Err(AppError)`: Validation or database error
    pub async fn check_availability(&self, stay: &StayRequest) -> Result<Option<Decimal>, AppError> {
        let room = AllocationService::new(self.db).find_available_room(stay).await?;

        Ok(room.map(|r| r.nightly_price))
    }

    /// Creates a pending reservation from the guest request channel.
    ///
    /// Upserts the client by identity document, then inserts the reservation
    /// with status `Pending`, channel `Online`, and no room assigned. No
    /// allocation happens here; staff confirm later.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created pending reservation
    /// - `Err(AppError)`: Validation failure, uniqueness conflict, or database error
    pub async fn create_request(
        &self,
        stay: StayRequest,
        client: UpsertClientParams,
    ) -> Result<entity::reservation::Model, AppError> {
        let client = self.upsert_client(client).await?;

        self.insert_with_retry(
            client.id,
            stay,
            ReservationChannel::Online,
            ReservationStatus::Pending,
            None,
        )
        .await
    }

    /// Creates a confirmed reservation from the staff walk-in channel.
    ///
    /// Runs the allocation engine synchronously; when no room qualifies the
    /// create is rejected as a conflict and nothing is persisted. On success
    /// the reservation is born `Confirmed` with the room bound and the
    /// allocation timestamp set.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created confirmed reservation
    /// - `Err(AppError::NoRoomAvailable)`: No qualifying room for the stay
    /// - `Err(AppError)`: Validation failure, uniqueness conflict, or database error
    pub async fn create_walk_in(
        &self,
        stay: StayRequest,
        client: UpsertClientParams,
    ) -> Result<entity::reservation::Model, AppError> {
        let client = self.upsert_client(client).await?;

        let room = AllocationService::new(self.db)
            .find_available_room(&stay)
            .await?
            .ok_or(AppError::NoRoomAvailable)?;

        self.insert_with_retry(
            client.id,
            stay,
            ReservationChannel::WalkIn,
            ReservationStatus::Confirmed,
            Some(room.id),
        )
        .await
    }

    /// Confirms a pending request, allocating its room.
    ///
    /// On allocation failure the reservation is left exactly as it was and
    /// the caller gets the distinct "no room available" outcome.
    ///
    /// # Returns
    /// - `Ok(Model)`: The confirmed reservation with room bound
    /// - `Err(AppError::NotFound)`: Unknown reservation ID
    /// - `Err(AppError::Transition)`: Reservation is not `Pending`
    /// - `Err(AppError::NoRoomAvailable)`: No qualifying room
    pub async fn confirm(&self, id: i32) -> Result<entity::reservation::Model, AppError> {
        let repo = ReservationRepository::new(self.db);
        let reservation = self.find_required(id).await?;

        let next = transition(reservation.status, ReservationEvent::Confirm)?;

        let stay = Self::stay_of(&reservation);
        let room = AllocationService::new(self.db)
            .find_available_room(&stay)
            .await?
            .ok_or(AppError::NoRoomAvailable)?;

        Ok(repo
            .apply_transition(reservation, next, Some((room.id, Utc::now())))
            .await?)
    }

    /// Checks a confirmed reservation in.
    ///
    /// A room is normally bound at confirmation or walk-in creation; when it
    /// is missing anyway the engine runs once more before check-in rather
    /// than letting an unassigned stay into the house.
    ///
    /// # Returns
    /// - `Ok(Model)`: The reservation, now `CheckedIn`
    /// - `Err(AppError::NotFound)`: Unknown reservation ID
    /// - `Err(AppError::Transition)`: Reservation is not `Confirmed`
    /// - `Err(AppError::NoRoomAvailable)`: Fallback allocation found nothing
    pub async fn check_in(&self, id: i32) -> Result<entity::reservation::Model, AppError> {
        let repo = ReservationRepository::new(self.db);
        let reservation = self.find_required(id).await?;

        let next = transition(reservation.status, ReservationEvent::CheckIn)?;

        let allocation = if reservation.room_id.is_none() {
            let stay = Self::stay_of(&reservation);
            let room = AllocationService::new(self.db)
                .find_available_room(&stay)
                .await?
                .ok_or(AppError::NoRoomAvailable)?;
            Some((room.id, Utc::now()))
        } else {
            None
        };

        Ok(repo.apply_transition(reservation, next, allocation).await?)
    }

    /// Checks a reservation out and issues its invoice.
    ///
    /// Computes the billed nights from the midnight-normalized stay dates,
    /// issues the invoice against the room's current nightly price, then
    /// moves the reservation to its terminal `CheckedOut` status.
    ///
    /// # Returns
    /// - `Ok((Model, Model))`: The checked-out reservation and its invoice
    /// - `Err(AppError::NotFound)`: Unknown reservation ID
    /// - `Err(AppError::Transition)`: Reservation is not `CheckedIn`
    /// - `Err(AppError::BadRequest)`: No room bound to the reservation
    pub async fn check_out(
        &self,
        id: i32,
    ) -> Result<(entity::reservation::Model, entity::invoice::Model), AppError> {
        let repo = ReservationRepository::new(self.db);
        let reservation = self.find_required(id).await?;

        let next = transition(reservation.status, ReservationEvent::CheckOut)?;

        let room_id = reservation.room_id.ok_or_else(|| {
            AppError::BadRequest("no room is assigned to this reservation".to_string())
        })?;
        let room = RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assigned room not found".to_string()))?;

        let nights = nights_between(reservation.arrival_date, reservation.departure_date) as i32;

        let invoice = InvoiceService::new(self.db)
            .issue(reservation.id, nights, room.nightly_price)
            .await?;

        let reservation = repo.apply_transition(reservation, next, None).await?;

        Ok((reservation, invoice))
    }

    /// Cancels a reservation that has not yet been checked in.
    ///
    /// No room side effects: any previously bound room simply stops being
    /// blocked because `Cancelled` is not an occupying status.
    ///
    /// # Returns
    /// - `Ok(Model)`: The cancelled reservation
    /// - `Err(AppError::NotFound)`: Unknown reservation ID
    /// - `Err(AppError::Transition)`: Reservation already in-house or terminal
    pub async fn cancel(&self, id: i32) -> Result<entity::reservation::Model, AppError> {
        let repo = ReservationRepository::new(self.db);
        let reservation = self.find_required(id).await?;

        let next = transition(reservation.status, ReservationEvent::Cancel)?;

        Ok(repo.apply_transition(reservation, next, None).await?)
    }

    /// Gets a reservation joined with its client and room.
    ///
    /// # Returns
    /// - `Ok(ReservationDetails)`: The reservation with related records
    /// - `Err(AppError::NotFound)`: Unknown reservation ID
    pub async fn get_details(&self, id: i32) -> Result<ReservationDetails, AppError> {
        let reservation = self.find_required(id).await?;

        let mut details = self.attach_details(vec![reservation]).await?;
        Ok(details.remove(0))
    }

    /// Lists reservations matching the filter, newest created first, each
    /// joined with its client and room.
    pub async fn list(&self, filter: ReservationFilter) -> Result<Vec<ReservationDetails>, AppError> {
        let reservations = ReservationRepository::new(self.db).list(filter).await?;
        self.attach_details(reservations).await
    }

    /// Lists pending online requests awaiting staff action.
    pub async fn list_pending(&self) -> Result<Vec<ReservationDetails>, AppError> {
        let reservations = ReservationRepository::new(self.db).list_pending().await?;
        self.attach_details(reservations).await
    }

    /// Lists confirmed reservations arriving today.
    pub async fn list_today_checkins(&self) -> Result<Vec<ReservationDetails>, AppError> {
        let today = Utc::now().date_naive();
        let reservations = ReservationRepository::new(self.db)
            .list_arrivals_on(today)
            .await?;
        self.attach_details(reservations).await
    }

    /// Lists reservations departing today, each annotated with the invoice
    /// it produced if check-out has already happened.
    pub async fn list_today_checkouts(&self) -> Result<Vec<CheckoutOverview>, AppError> {
        let today = Utc::now().date_naive();
        let reservations = ReservationRepository::new(self.db)
            .list_departures_on(today)
            .await?;

        let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
        let invoice_ids: HashMap<i32, i32> = InvoiceRepository::new(self.db)
            .find_for_reservations(&ids)
            .await?
            .into_iter()
            .collect();

        let details = self.attach_details(reservations).await?;

        Ok(details
            .into_iter()
            .map(|details| {
                let invoice_id = invoice_ids.get(&details.reservation.id).copied();
                CheckoutOverview {
                    details,
                    invoice_id,
                }
            })
            .collect())
    }

    /// Rebuilds the stay request a persisted reservation was created from.
    fn stay_of(reservation: &entity::reservation::Model) -> StayRequest {
        StayRequest {
            room_type: reservation.room_type,
            party_size: reservation.party_size,
            arrival_date: reservation.arrival_date,
            departure_date: reservation.departure_date,
        }
    }

    async fn find_required(&self, id: i32) -> Result<entity::reservation::Model, AppError> {
        ReservationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    async fn upsert_client(
        &self,
        params: UpsertClientParams,
    ) -> Result<entity::client::Model, AppError> {
        ClientRepository::new(self.db)
            .upsert(params)
            .await
            .map_err(|err| {
                if matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))) {
                    AppError::Conflict("a conflicting client record already exists".to_string())
                } else {
                    err.into()
                }
            })
    }

    /// Inserts a reservation, regenerating the number on collision.
    ///
    /// Up to [`MAX_NUMBER_ATTEMPTS`] tries: each attempt generates a fresh
    /// number from the yearly sequence and inserts. Only a unique violation
    /// on the reservation-number column warrants a retry; any other error
    /// aborts immediately, and exhausting the attempts surfaces a conflict.
    async fn insert_with_retry(
        &self,
        client_id: i32,
        stay: StayRequest,
        channel: ReservationChannel,
        status: ReservationStatus,
        room_id: Option<i32>,
    ) -> Result<entity::reservation::Model, AppError> {
        let repo = ReservationRepository::new(self.db);
        let numbering = NumberingService::new(self.db);
        let allocated_at = room_id.map(|_| Utc::now());
        let year = Utc::now().year();

        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            let reservation_number = numbering.next_number(NumberKind::Reservation, year).await?;

            let result = repo
                .insert(InsertReservationParams {
                    reservation_number,
                    client_id,
                    stay,
                    channel,
                    status,
                    room_id,
                    allocated_at,
                })
                .await;

            match result {
                Ok(reservation) => return Ok(reservation),
                Err(err) if is_unique_violation(&err, "reservation_number") => {
                    if attempt == MAX_NUMBER_ATTEMPTS {
                        return Err(AppError::Conflict(
                            "reservation number already in use, please retry".to_string(),
                        ));
                    }
                    tracing::debug!(attempt, "reservation number collision, regenerating");
                }
                Err(err) => return Err(err.into()),
            }
        }

        unreachable!("retry loop returns on success, exhaustion, or error")
    }

    async fn attach_details(
        &self,
        reservations: Vec<entity::reservation::Model>,
    ) -> Result<Vec<ReservationDetails>, AppError> {
        let clients = ClientRepository::new(self.db);
        let rooms = RoomRepository::new(self.db);

        let mut client_cache: HashMap<i32, entity::client::Model> = HashMap::new();
        let mut room_cache: HashMap<i32, entity::room::Model> = HashMap::new();
        let mut details = Vec::with_capacity(reservations.len());

        for reservation in reservations {
            let client = match client_cache.get(&reservation.client_id) {
                Some(client) => Some(client.clone()),
                None => {
                    let client = clients.find_by_id(reservation.client_id).await?;
                    if let Some(ref client) = client {
                        client_cache.insert(client.id, client.clone());
                    }
                    client
                }
            };

            let room = match reservation.room_id {
                Some(room_id) => match room_cache.get(&room_id) {
                    Some(room) => Some(room.clone()),
                    None => {
                        let room = rooms.find_by_id(room_id).await?;
                        if let Some(ref room) = room {
                            room_cache.insert(room.id, room.clone());
                        }
                        room
                    }
                },
                None => None,
            };

            details.push(ReservationDetails {
                reservation,
                client,
                room,
            });
        }

        Ok(details)
    }
}
