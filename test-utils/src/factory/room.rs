//! Room factory for creating test room entities.
//!
//! Provides factory methods for creating room entities with sensible
//! defaults, customizable through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::enums::{RoomState, RoomType};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::room::RoomFactory;
///
/// let room = RoomFactory::new(&db)
///     .number("204")
///     .room_type(RoomType::Twin)
///     .capacity(2)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    number: String,
    room_type: RoomType,
    capacity: i32,
    nightly_price: Decimal,
    state: RoomState,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - number: `"{n}"` where n is 100 + an auto-incremented counter
    /// - room_type: `RoomType::Single`
    /// - capacity: `1`
    /// - nightly_price: `80`
    /// - state: `RoomState::Available`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RoomFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            number: format!("{}", 100 + id),
            room_type: RoomType::Single,
            capacity: 1,
            nightly_price: Decimal::from(80),
            state: RoomState::Available,
        }
    }

    /// Sets the human-facing room number.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the room type.
    pub fn room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    /// Sets the room capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the nightly price.
    pub fn nightly_price(mut self, nightly_price: Decimal) -> Self {
        self.nightly_price = nightly_price;
        self
    }

    /// Sets the room state.
    pub fn state(mut self, state: RoomState) -> Self {
        self.state = state;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            number: ActiveValue::Set(self.number),
            room_type: ActiveValue::Set(self.room_type),
            capacity: ActiveValue::Set(self.capacity),
            nightly_price: ActiveValue::Set(self.nightly_price),
            state: ActiveValue::Set(self.state),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
///
/// Shorthand for `RoomFactory::new(db).build()`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::room::Model)` - Created room entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
