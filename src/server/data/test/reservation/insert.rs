use super::*;

/// Tests inserting a pending online reservation.
///
/// Expected: Ok with status Pending, channel Online, and no room bound
#[tokio::test]
async fn inserts_pending_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo.insert(insert_params("RES-2025-000001", client.id)).await?;

    assert_eq!(reservation.reservation_number, "RES-2025-000001");
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.channel, ReservationChannel::Online);
    assert_eq!(reservation.arrival_date, date("2025-07-01"));
    assert_eq!(reservation.departure_date, date("2025-07-03"));
    assert!(reservation.room_id.is_none());
    assert!(reservation.allocated_at.is_none());

    Ok(())
}

/// Tests that a duplicate reservation number trips the unique index and is
/// classifiable as a number collision, which is the signal the create retry
/// loop keys on.
///
/// Expected: Err with a unique violation on "reservation_number"
#[tokio::test]
async fn rejects_duplicate_reservation_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;

    let repo = ReservationRepository::new(db);
    repo.insert(insert_params("RES-2025-000001", client.id)).await?;

    let err = repo
        .insert(insert_params("RES-2025-000001", client.id))
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err, "reservation_number"));

    Ok(())
}

/// Tests inserting a confirmed walk-in with its room already bound.
///
/// Expected: Ok with room and allocation timestamp persisted
#[tokio::test]
async fn inserts_confirmed_walk_in_with_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let client = factory::client::create_client(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .insert(InsertReservationParams {
            channel: ReservationChannel::WalkIn,
            status: ReservationStatus::Confirmed,
            room_id: Some(room.id),
            allocated_at: Some(Utc::now()),
            ..insert_params("RES-2025-000002", client.id)
        })
        .await?;

    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.channel, ReservationChannel::WalkIn);
    assert_eq!(reservation.room_id, Some(room.id));
    assert!(reservation.allocated_at.is_some());

    Ok(())
}
