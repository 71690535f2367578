use super::*;

/// Tests inserting an invoice for a checked-out reservation.
///
/// Expected: Ok with all billing fields persisted
#[tokio::test]
async fn inserts_invoice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_client(db).await?;

    let repo = InvoiceRepository::new(db);
    let invoice = repo
        .insert(
            "FAC-2025-000001".to_string(),
            reservation.id,
            2,
            Decimal::from(80),
            Decimal::from(160),
            Utc::now(),
        )
        .await?;

    assert_eq!(invoice.invoice_number, "FAC-2025-000001");
    assert_eq!(invoice.reservation_id, reservation.id);
    assert_eq!(invoice.nights, 2);
    assert_eq!(invoice.total, Decimal::from(160));

    Ok(())
}

/// Tests the one-invoice-per-reservation index.
///
/// A second invoice for the same reservation must fail as a unique
/// violation on the reservation reference, never as a number collision.
///
/// Expected: Err with a unique violation on "reservation_id"
#[tokio::test]
async fn rejects_second_invoice_for_same_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reservation) = factory::helpers::create_reservation_with_client(db).await?;
    factory::invoice::create_invoice(db, reservation.id).await?;

    let repo = InvoiceRepository::new(db);
    let err = repo
        .insert(
            "FAC-2025-999999".to_string(),
            reservation.id,
            1,
            Decimal::from(80),
            Decimal::from(80),
            Utc::now(),
        )
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err, "reservation_id"));
    assert!(!is_unique_violation(&err, "invoice_number"));

    Ok(())
}

/// Tests the invoice-number unique index across reservations.
///
/// Expected: Err with a unique violation on "invoice_number"
#[tokio::test]
async fn rejects_duplicate_invoice_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_reservation_with_client(db).await?;
    let (_, second) = factory::helpers::create_reservation_with_client(db).await?;

    let repo = InvoiceRepository::new(db);
    repo.insert(
        "FAC-2025-000001".to_string(),
        first.id,
        1,
        Decimal::from(80),
        Decimal::from(80),
        Utc::now(),
    )
    .await?;

    let err = repo
        .insert(
            "FAC-2025-000001".to_string(),
            second.id,
            1,
            Decimal::from(80),
            Decimal::from(80),
            Utc::now(),
        )
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err, "invoice_number"));

    Ok(())
}
