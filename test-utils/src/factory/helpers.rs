//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a reservation together with its owning client.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific fields.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((client, reservation))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_client(
    db: &DatabaseConnection,
) -> Result<(entity::client::Model, entity::reservation::Model), DbErr> {
    let client = crate::factory::client::create_client(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, client.id).await?;

    Ok((client, reservation))
}

/// Creates a confirmed reservation bound to a freshly created room.
///
/// Creates a room, a client, and a reservation in `Confirmed` status with the
/// room already assigned. Useful for check-in/check-out and conflict tests.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((room, client, reservation))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_confirmed_reservation(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::room::Model,
        entity::client::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    use entity::enums::ReservationStatus;

    let room = crate::factory::room::create_room(db).await?;
    let client = crate::factory::client::create_client(db).await?;
    let reservation = crate::factory::reservation::ReservationFactory::new(db, client.id)
        .status(ReservationStatus::Confirmed)
        .room_id(Some(room.id))
        .allocated_at(Some(chrono::Utc::now()))
        .build()
        .await?;

    Ok((room, client, reservation))
}
