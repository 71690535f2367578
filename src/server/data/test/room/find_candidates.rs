use super::*;

/// Tests that candidates come back ordered by room number ascending.
///
/// Expected: Ok with rooms in lexicographic number order
#[tokio::test]
async fn orders_candidates_by_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db).number("103").build().await?;
    factory::room::RoomFactory::new(db).number("101").build().await?;
    factory::room::RoomFactory::new(db).number("102").build().await?;

    let repo = RoomRepository::new(db);
    let candidates = repo.find_candidates(RoomType::Single, 1).await?;

    let numbers: Vec<&str> = candidates.iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, vec!["101", "102", "103"]);

    Ok(())
}

/// Tests that rooms under maintenance are never candidates.
///
/// Expected: Ok with only the available room
#[tokio::test]
async fn excludes_maintenance_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .number("101")
        .state(RoomState::Maintenance)
        .build()
        .await?;
    factory::room::RoomFactory::new(db).number("102").build().await?;

    let repo = RoomRepository::new(db);
    let candidates = repo.find_candidates(RoomType::Single, 1).await?;

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].number, "102");

    Ok(())
}

/// Tests that capacity and room type both constrain the candidate set.
///
/// Expected: Ok with only rooms of the requested type that hold the party
#[tokio::test]
async fn filters_by_type_and_capacity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .number("201")
        .room_type(RoomType::Family)
        .capacity(4)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .number("202")
        .room_type(RoomType::Family)
        .capacity(2)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .number("203")
        .room_type(RoomType::Twin)
        .capacity(4)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let candidates = repo.find_candidates(RoomType::Family, 3).await?;

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].number, "201");

    Ok(())
}
