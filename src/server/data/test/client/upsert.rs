use super::*;

/// Tests upserting a new client.
///
/// Expected: Ok with the record created and normalized fields stored
#[tokio::test]
async fn creates_new_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .with_index(client_document_index())
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let client = repo.upsert(params_for("AB123456", "0611111111")).await?;

    assert_eq!(client.full_name, "Amina Berrada");
    assert_eq!(client.document_type, DocumentType::NationalId);
    assert_eq!(client.document_number, "AB123456");

    Ok(())
}

/// Tests the idempotent upsert on the identity-document natural key.
///
/// Submitting the same (document_type, document_number) twice with a new
/// phone number must update the stored contact fields in place rather than
/// creating a second record.
///
/// Expected: Ok with exactly one record carrying the latest phone
#[tokio::test]
async fn repeated_submission_updates_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .with_index(client_document_index())
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let first = repo.upsert(params_for("AB123456", "0611111111")).await?;
    let second = repo.upsert(params_for("AB123456", "0622222222")).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.phone, "0622222222");

    let count = entity::prelude::Client::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that distinct documents create distinct records.
///
/// The same contact details under a different document number are a
/// different person as far as the registry is concerned.
///
/// Expected: Ok with two records
#[tokio::test]
async fn distinct_documents_create_distinct_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .with_index(client_document_index())
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let first = repo.upsert(params_for("AB123456", "0611111111")).await?;
    let second = repo.upsert(params_for("CD789012", "0611111111")).await?;

    assert_ne!(first.id, second.id);

    let count = entity::prelude::Client::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that the same document number under a different document type is a
/// different natural key.
///
/// Expected: Ok with two records
#[tokio::test]
async fn document_type_is_part_of_the_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .with_index(client_document_index())
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let national = repo.upsert(params_for("X999", "0611111111")).await?;

    let passport = repo
        .upsert(
            crate::server::model::client::UpsertClientParams::new(
                "Amina Berrada",
                "0611111111",
                "amina@example.com",
                DocumentType::Passport,
                "X999",
            )
            .unwrap(),
        )
        .await?;

    assert_ne!(national.id, passport.id);

    Ok(())
}
