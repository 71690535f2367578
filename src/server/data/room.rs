use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::room::{CreateRoomParams, RoomFilter, UpdateRoomParams};
use entity::enums::{RoomState, RoomType};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new room.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created room
    /// - `Err(DbErr)`: Database error, including the unique violation on a
    ///   duplicate room number (classified by the caller)
    pub async fn create(&self, params: CreateRoomParams) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            number: ActiveValue::Set(params.number),
            room_type: ActiveValue::Set(params.room_type),
            capacity: ActiveValue::Set(params.capacity),
            nightly_price: ActiveValue::Set(params.nightly_price),
            state: ActiveValue::Set(params.state),
            created_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets a room by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }

    /// Lists rooms matching the filter, ordered by room number ascending.
    ///
    /// # Arguments
    /// - `filter`: Optional type/state/min-capacity constraints
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Matching rooms
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self, filter: RoomFilter) -> Result<Vec<entity::room::Model>, DbErr> {
        let mut query = entity::prelude::Room::find();

        if let Some(room_type) = filter.room_type {
            query = query.filter(entity::room::Column::RoomType.eq(room_type));
        }
        if let Some(state) = filter.state {
            query = query.filter(entity::room::Column::State.eq(state));
        }
        if let Some(min_capacity) = filter.min_capacity {
            query = query.filter(entity::room::Column::Capacity.gte(min_capacity));
        }

        query
            .order_by_asc(entity::room::Column::Number)
            .all(self.db)
            .await
    }

    /// Selects allocation candidates: rooms of the requested type with
    /// sufficient capacity that are currently `Available`, ordered by room
    /// number ascending so the lowest number always wins ties.
    ///
    /// # Arguments
    /// - `room_type`: Requested room category
    /// - `min_capacity`: Party size the room must hold
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Candidate rooms in deterministic order
    /// - `Err(DbErr)`: Database error
    pub async fn find_candidates(
        &self,
        room_type: RoomType,
        min_capacity: i32,
    ) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomType.eq(room_type))
            .filter(entity::room::Column::Capacity.gte(min_capacity))
            .filter(entity::room::Column::State.eq(RoomState::Available))
            .order_by_asc(entity::room::Column::Number)
            .all(self.db)
            .await
    }

    /// Applies a whitelisted-field update to a room.
    ///
    /// Only fields present in `params` are written; everything else is left
    /// untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated room
    /// - `Ok(None)`: No room with that ID
    /// - `Err(DbErr)`: Database error, including duplicate-number violations
    pub async fn update(
        &self,
        id: i32,
        params: UpdateRoomParams,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let Some(room) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = room.into();

        if let Some(number) = params.number {
            active.number = ActiveValue::Set(number);
        }
        if let Some(room_type) = params.room_type {
            active.room_type = ActiveValue::Set(room_type);
        }
        if let Some(capacity) = params.capacity {
            active.capacity = ActiveValue::Set(capacity);
        }
        if let Some(nightly_price) = params.nightly_price {
            active.nightly_price = ActiveValue::Set(nightly_price);
        }
        if let Some(state) = params.state {
            active.state = ActiveValue::Set(state);
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Sets just the operational state of a room.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated room
    /// - `Ok(None)`: No room with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn set_state(
        &self,
        id: i32,
        state: RoomState,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        let Some(room) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = room.into();
        active.state = ActiveValue::Set(state);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a room by ID.
    ///
    /// # Returns
    /// - `Ok(true)`: Room deleted
    /// - `Ok(false)`: No room with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
