use super::*;

/// Tests the status, channel, and room-type filters.
///
/// Expected: Ok with only reservations matching every provided filter
#[tokio::test]
async fn filters_by_status_channel_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;

    factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Confirmed)
        .channel(ReservationChannel::WalkIn)
        .room_type(RoomType::Double)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Pending)
        .channel(ReservationChannel::Online)
        .room_type(RoomType::Single)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    let confirmed = repo
        .list(ReservationFilter {
            status: Some(ReservationStatus::Confirmed),
            ..Default::default()
        })
        .await?;
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].channel, ReservationChannel::WalkIn);

    let online_singles = repo
        .list(ReservationFilter {
            channel: Some(ReservationChannel::Online),
            room_type: Some(RoomType::Single),
            ..Default::default()
        })
        .await?;
    assert_eq!(online_singles.len(), 1);
    assert_eq!(online_singles[0].status, ReservationStatus::Pending);

    Ok(())
}

/// Tests the arrival-date range filter.
///
/// Expected: Ok with only stays arriving inside the inclusive window
#[tokio::test]
async fn filters_by_arrival_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;

    factory::reservation::ReservationFactory::new(db, client.id)
        .dates("2025-06-01", "2025-06-05")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, client.id)
        .dates("2025-07-01", "2025-07-05")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, client.id)
        .dates("2025-08-01", "2025-08-05")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let in_window = repo
        .list(ReservationFilter {
            from: Some(date("2025-06-15")),
            to: Some(date("2025-07-15")),
            ..Default::default()
        })
        .await?;

    assert_eq!(in_window.len(), 1);
    assert_eq!(in_window[0].arrival_date, date("2025-07-01"));

    Ok(())
}

/// Tests that the pending view only surfaces online requests.
///
/// A walk-in is born confirmed and a cancelled request is done; neither
/// belongs in the staff work queue.
///
/// Expected: Ok with exactly the pending online reservation
#[tokio::test]
async fn pending_view_only_lists_online_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;

    let pending = factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Pending)
        .channel(ReservationChannel::Online)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Confirmed)
        .channel(ReservationChannel::WalkIn)
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Cancelled)
        .channel(ReservationChannel::Online)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let queue = repo.list_pending().await?;

    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, pending.id);

    Ok(())
}
