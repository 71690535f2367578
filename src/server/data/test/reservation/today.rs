use super::*;

fn fmt(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Tests the today-checkins view: confirmed stays arriving on the day.
///
/// Expected: Ok with only the confirmed reservation arriving today
#[tokio::test]
async fn lists_confirmed_arrivals_for_the_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    let today = Utc::now().date_naive();
    let tomorrow = today + chrono::Duration::days(1);
    let later = today + chrono::Duration::days(5);

    let arriving = factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Confirmed)
        .dates(&fmt(today), &fmt(tomorrow))
        .build()
        .await?;
    // Arriving today but still pending: not ready for check-in.
    factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Pending)
        .dates(&fmt(today), &fmt(tomorrow))
        .build()
        .await?;
    // Confirmed but arriving later.
    factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Confirmed)
        .dates(&fmt(tomorrow), &fmt(later))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let arrivals = repo.list_arrivals_on(today).await?;

    assert_eq!(arrivals.len(), 1);
    assert_eq!(arrivals[0].id, arriving.id);

    Ok(())
}

/// Tests the today-checkouts view: departures of the day in confirmed,
/// in-house, or already-checked-out status.
///
/// Expected: Ok with the three departing stays, excluding the cancelled one
#[tokio::test]
async fn lists_departures_for_the_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    let today = Utc::now().date_naive();
    let two_days_ago = today - chrono::Duration::days(2);

    for status in [
        ReservationStatus::Confirmed,
        ReservationStatus::CheckedIn,
        ReservationStatus::CheckedOut,
    ] {
        factory::reservation::ReservationFactory::new(db, client.id)
            .status(status)
            .dates(&fmt(two_days_ago), &fmt(today))
            .build()
            .await?;
    }
    factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Cancelled)
        .dates(&fmt(two_days_ago), &fmt(today))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let departures = repo.list_departures_on(today).await?;

    assert_eq!(departures.len(), 3);
    assert!(departures.iter().all(|r| r.departure_date == today));

    Ok(())
}
