use super::*;

/// Tests listing with no filter returns everything ordered by number.
///
/// Expected: Ok with all rooms in number order
#[tokio::test]
async fn lists_all_rooms_in_number_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db).number("302").build().await?;
    factory::room::RoomFactory::new(db).number("301").build().await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.list(RoomFilter::default()).await?;

    let numbers: Vec<&str> = rooms.iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, vec!["301", "302"]);

    Ok(())
}

/// Tests combining type, state, and min-capacity filters.
///
/// Expected: Ok with only rooms matching every constraint
#[tokio::test]
async fn applies_all_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .number("101")
        .room_type(RoomType::Double)
        .capacity(2)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .number("102")
        .room_type(RoomType::Double)
        .capacity(2)
        .state(RoomState::Maintenance)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .number("103")
        .room_type(RoomType::Single)
        .capacity(1)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let rooms = repo
        .list(RoomFilter {
            room_type: Some(RoomType::Double),
            state: Some(RoomState::Available),
            min_capacity: Some(2),
        })
        .await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].number, "101");

    Ok(())
}
