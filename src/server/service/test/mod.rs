use crate::server::{
    error::AppError,
    model::{client::UpsertClientParams, reservation::StayRequest},
    service::{allocation::AllocationService, reservation::ReservationService},
};
use chrono::NaiveDate;
use entity::enums::{DocumentType, ReservationStatus, RoomType};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn stay(room_type: RoomType, party_size: i32, arrival: &str, departure: &str) -> StayRequest {
    StayRequest {
        room_type,
        party_size,
        arrival_date: date(arrival),
        departure_date: date(departure),
    }
}

fn guest(document_number: &str, phone: &str) -> UpsertClientParams {
    UpsertClientParams::new(
        "Amina Berrada",
        phone,
        "amina@example.com",
        DocumentType::NationalId,
        document_number,
    )
    .unwrap()
}
