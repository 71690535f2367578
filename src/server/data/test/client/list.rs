use super::*;

/// Tests the free-text query across name, phone, email, and document.
///
/// Expected: Ok with only the matching client
#[tokio::test]
async fn filters_by_free_text_query() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::ClientFactory::new(db)
        .full_name("Amina Berrada")
        .phone("0611111111")
        .email("amina@example.com")
        .document(DocumentType::NationalId, "AB123456")
        .build()
        .await?;
    factory::client::ClientFactory::new(db)
        .full_name("Karim Idrissi")
        .phone("0622222222")
        .email("karim@example.com")
        .document(DocumentType::Passport, "P7654321")
        .build()
        .await?;

    let repo = ClientRepository::new(db);

    let by_name = repo.list(Some("amina")).await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].full_name, "Amina Berrada");

    let by_phone = repo.list(Some("0622")).await?;
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].full_name, "Karim Idrissi");

    let by_document = repo.list(Some("P765")).await?;
    assert_eq!(by_document.len(), 1);
    assert_eq!(by_document[0].full_name, "Karim Idrissi");

    Ok(())
}

/// Tests that a blank query falls back to listing everyone.
///
/// Expected: Ok with both clients
#[tokio::test]
async fn blank_query_lists_everyone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::create_client(db).await?;
    factory::client::create_client(db).await?;

    let repo = ClientRepository::new(db);

    assert_eq!(repo.list(None).await?.len(), 2);
    assert_eq!(repo.list(Some("   ")).await?.len(), 2);

    Ok(())
}
