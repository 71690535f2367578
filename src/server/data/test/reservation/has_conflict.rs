use super::*;

async fn occupying_reservation(
    db: &sea_orm::DatabaseConnection,
    room_id: i32,
    status: ReservationStatus,
    arrival: &str,
    departure: &str,
) -> Result<entity::reservation::Model, DbErr> {
    let client = factory::client::create_client(db).await?;
    factory::reservation::ReservationFactory::new(db, client.id)
        .status(status)
        .room_id(Some(room_id))
        .dates(arrival, departure)
        .build()
        .await
}

/// Tests the half-open overlap rule on a booked room.
///
/// Given an existing Confirmed stay [2025-06-10, 2025-06-15) on the room, a
/// request overlapping the interior must conflict.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_interior_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    occupying_reservation(db, room.id, ReservationStatus::Confirmed, "2025-06-10", "2025-06-15")
        .await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.has_conflict(room.id, date("2025-06-14"), date("2025-06-16")).await?);
    assert!(repo.has_conflict(room.id, date("2025-06-01"), date("2025-06-11")).await?);
    assert!(repo.has_conflict(room.id, date("2025-06-11"), date("2025-06-12")).await?);

    Ok(())
}

/// Tests that back-to-back stays never conflict.
///
/// One guest's departure date may equal the next guest's arrival date: the
/// interval end is exclusive, so same-day turnover is always legal.
///
/// Expected: Ok(false) on both boundary cases
#[tokio::test]
async fn allows_back_to_back_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    occupying_reservation(db, room.id, ReservationStatus::Confirmed, "2025-06-10", "2025-06-15")
        .await?;

    let repo = ReservationRepository::new(db);

    // New arrival on the existing departure day.
    assert!(!repo.has_conflict(room.id, date("2025-06-15"), date("2025-06-18")).await?);
    // New departure on the existing arrival day.
    assert!(!repo.has_conflict(room.id, date("2025-06-07"), date("2025-06-10")).await?);

    Ok(())
}

/// Tests that only occupying statuses block the calendar.
///
/// Pending, cancelled, and checked-out stays on the same room and interval
/// must not register as conflicts.
///
/// Expected: Ok(false) for every non-occupying status, Ok(true) for CheckedIn
#[tokio::test]
async fn only_occupying_statuses_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo_room = factory::room::create_room(db).await?;
    let repo = ReservationRepository::new(db);

    for status in [
        ReservationStatus::Pending,
        ReservationStatus::Cancelled,
        ReservationStatus::CheckedOut,
    ] {
        occupying_reservation(db, repo_room.id, status, "2025-06-10", "2025-06-15").await?;
    }
    assert!(!repo.has_conflict(repo_room.id, date("2025-06-12"), date("2025-06-14")).await?);

    occupying_reservation(
        db,
        repo_room.id,
        ReservationStatus::CheckedIn,
        "2025-06-10",
        "2025-06-15",
    )
    .await?;
    assert!(repo.has_conflict(repo_room.id, date("2025-06-12"), date("2025-06-14")).await?);

    Ok(())
}

/// Tests that a booking on one room never blocks another.
///
/// Expected: Ok(false) for the untouched room
#[tokio::test]
async fn conflicts_are_per_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let booked = factory::room::create_room(db).await?;
    let free = factory::room::create_room(db).await?;
    occupying_reservation(db, booked.id, ReservationStatus::Confirmed, "2025-06-10", "2025-06-15")
        .await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.has_conflict(booked.id, date("2025-06-12"), date("2025-06-14")).await?);
    assert!(!repo.has_conflict(free.id, date("2025-06-12"), date("2025-06-14")).await?);

    Ok(())
}
