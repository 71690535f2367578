use crate::server::{
    data::{is_unique_violation, reservation::ReservationRepository},
    model::reservation::{InsertReservationParams, ReservationFilter, StayRequest},
};
use chrono::{NaiveDate, Utc};
use entity::enums::{ReservationChannel, ReservationStatus, RoomType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod has_conflict;
mod insert;
mod last_number;
mod list;
mod today;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn stay(arrival: &str, departure: &str) -> StayRequest {
    StayRequest {
        room_type: RoomType::Single,
        party_size: 1,
        arrival_date: date(arrival),
        departure_date: date(departure),
    }
}

fn insert_params(number: &str, client_id: i32) -> InsertReservationParams {
    InsertReservationParams {
        reservation_number: number.to_string(),
        client_id,
        stay: stay("2025-07-01", "2025-07-03"),
        channel: ReservationChannel::Online,
        status: ReservationStatus::Pending,
        room_id: None,
        allocated_at: None,
    }
}
