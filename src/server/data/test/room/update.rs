use super::*;

/// Tests that only provided fields are written.
///
/// Expected: Ok with price changed and every other field untouched
#[tokio::test]
async fn updates_only_whitelisted_fields_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .number("104")
        .capacity(2)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(
            room.id,
            UpdateRoomParams {
                nightly_price: Some(Decimal::from(150)),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.nightly_price, Decimal::from(150));
    assert_eq!(updated.number, "104");
    assert_eq!(updated.capacity, 2);

    Ok(())
}

/// Tests updating an unknown room.
///
/// Expected: Ok(None), no error
#[tokio::test]
async fn returns_none_for_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let updated = repo.update(9999, UpdateRoomParams::default()).await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests renumbering onto an existing room number.
///
/// Expected: Err with a unique violation on "number"
#[tokio::test]
async fn rejects_update_to_taken_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db).number("105").build().await?;
    let room = factory::room::RoomFactory::new(db).number("106").build().await?;

    let repo = RoomRepository::new(db);
    let err = repo
        .update(
            room.id,
            UpdateRoomParams {
                number: Some("105".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err, "number"));

    Ok(())
}
