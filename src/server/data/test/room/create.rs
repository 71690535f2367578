use super::*;

/// Tests creating a room with explicit field values.
///
/// Expected: Ok with all fields persisted as given
#[tokio::test]
async fn creates_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo.create(sample_params("204")).await?;

    assert_eq!(room.number, "204");
    assert_eq!(room.room_type, RoomType::Double);
    assert_eq!(room.capacity, 2);
    assert_eq!(room.nightly_price, Decimal::from(120));
    assert_eq!(room.state, RoomState::Available);

    Ok(())
}

/// Tests that a duplicate room number trips the unique index.
///
/// The violation must be classifiable as one on the `number` column so the
/// controller can answer 409 instead of 500.
///
/// Expected: Err with a unique violation on "number"
#[tokio::test]
async fn rejects_duplicate_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    repo.create(sample_params("204")).await?;

    let err = repo.create(sample_params("204")).await.unwrap_err();
    assert!(is_unique_violation(&err, "number"));

    Ok(())
}
