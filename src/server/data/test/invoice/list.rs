use super::*;

/// Tests the invoice-date range filter.
///
/// Expected: Ok with only invoices dated inside the window
#[tokio::test]
async fn filters_by_invoice_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, in_window) = factory::helpers::create_reservation_with_client(db).await?;
    let (_, before) = factory::helpers::create_reservation_with_client(db).await?;

    factory::invoice::InvoiceFactory::new(db, in_window.id)
        .invoice_date(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap())
        .build()
        .await?;
    factory::invoice::InvoiceFactory::new(db, before.id)
        .invoice_date(Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap())
        .build()
        .await?;

    let repo = InvoiceRepository::new(db);
    let invoices = repo
        .list(Some(date("2025-06-01")), Some(date("2025-06-30")), None)
        .await?;

    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].reservation_id, in_window.id);

    Ok(())
}

/// Tests the invoice-number substring filter.
///
/// Expected: Ok with only the matching invoice
#[tokio::test]
async fn filters_by_invoice_number_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_reservation_with_client(db).await?;
    let (_, second) = factory::helpers::create_reservation_with_client(db).await?;

    factory::invoice::InvoiceFactory::new(db, first.id)
        .invoice_number("FAC-2025-000123")
        .build()
        .await?;
    factory::invoice::InvoiceFactory::new(db, second.id)
        .invoice_number("FAC-2025-000456")
        .build()
        .await?;

    let repo = InvoiceRepository::new(db);
    let invoices = repo.list(None, None, Some("000123")).await?;

    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].invoice_number, "FAC-2025-000123");

    Ok(())
}

/// Tests the reservation-to-invoice map behind the today-checkouts view.
///
/// Expected: Ok with pairs only for invoiced reservations
#[tokio::test]
async fn maps_reservations_to_their_invoices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, invoiced) = factory::helpers::create_reservation_with_client(db).await?;
    let (_, not_invoiced) = factory::helpers::create_reservation_with_client(db).await?;

    let invoice = factory::invoice::create_invoice(db, invoiced.id).await?;

    let repo = InvoiceRepository::new(db);
    let pairs = repo
        .find_for_reservations(&[invoiced.id, not_invoiced.id])
        .await?;

    assert_eq!(pairs, vec![(invoiced.id, invoice.id)]);
    assert!(repo.find_for_reservations(&[]).await?.is_empty());

    Ok(())
}

/// Tests looking an invoice up through its reservation.
///
/// Expected: Ok(Some) for the billed reservation, Ok(None) otherwise
#[tokio::test]
async fn finds_invoice_by_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, billed) = factory::helpers::create_reservation_with_client(db).await?;
    let (_, unbilled) = factory::helpers::create_reservation_with_client(db).await?;

    let invoice = factory::invoice::create_invoice(db, billed.id).await?;

    let repo = InvoiceRepository::new(db);

    let found = repo.find_by_reservation_id(billed.id).await?;
    assert_eq!(found.map(|i| i.id), Some(invoice.id));

    assert!(repo.find_by_reservation_id(unbilled.id).await?.is_none());

    Ok(())
}
