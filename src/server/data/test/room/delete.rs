use super::*;

/// Tests deleting an existing room.
///
/// Expected: Ok(true), room gone
#[tokio::test]
async fn deletes_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);
    assert!(repo.delete(room.id).await?);
    assert!(repo.find_by_id(room.id).await?.is_none());

    Ok(())
}

/// Tests deleting an unknown room.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    assert!(!repo.delete(9999).await?);

    Ok(())
}
