use super::*;

/// Tests the number scan over an empty store.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_numbers_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let last = repo.last_number_with_prefix("RES-2025-").await?;

    assert!(last.is_none());

    Ok(())
}

/// Tests that the scan finds the highest number under the prefix.
///
/// Zero-padding makes lexicographic order agree with numeric order, which
/// is exactly what the scan leans on.
///
/// Expected: Ok(Some) with the highest suffix
#[tokio::test]
async fn finds_highest_number_for_year() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    for number in ["RES-2025-000002", "RES-2025-000042", "RES-2025-000007"] {
        factory::reservation::ReservationFactory::new(db, client.id)
            .reservation_number(number)
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);
    let last = repo.last_number_with_prefix("RES-2025-").await?;

    assert_eq!(last.as_deref(), Some("RES-2025-000042"));

    Ok(())
}

/// Tests that each year's sequence is isolated by its prefix.
///
/// Expected: Ok with last-of-2024 invisible to the 2025 scan
#[tokio::test]
async fn scans_are_isolated_per_year() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_reservation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    factory::reservation::ReservationFactory::new(db, client.id)
        .reservation_number("RES-2024-000099")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.last_number_with_prefix("RES-2025-").await?.is_none());
    assert_eq!(
        repo.last_number_with_prefix("RES-2024-").await?.as_deref(),
        Some("RES-2024-000099")
    );

    Ok(())
}
