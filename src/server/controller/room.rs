use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        room::{CreateRoomDto, RoomDto, SetRoomStateDto, UpdateRoomDto},
    },
    server::{
        data::{is_unique_violation, room::RoomRepository},
        error::AppError,
        middleware::auth::{AuthGuard, ADMIN},
        model::room::{CreateRoomParams, RoomFilter, UpdateRoomParams},
        state::AppState,
        util::parse::{parse_room_state, parse_room_type},
    },
};
use entity::enums::RoomState;

const ROOM_TAG: &str = "rooms";

#[derive(Deserialize, Default)]
pub struct RoomListQuery {
    pub room_type: Option<String>,
    pub state: Option<String>,
    pub min_capacity: Option<i32>,
}

/// POST /api/rooms
/// Create a new room. Admin only.
///
/// # Returns
/// - `201 Created` - Successfully created room
/// - `400 Bad Request` - Unknown room type/state or non-positive capacity
/// - `409 Conflict` - Room number already exists
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Successfully created room", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Caller not authenticated as an administrator", body = ErrorDto),
        (status = 409, description = "Room number already exists", body = ErrorDto),
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(ADMIN)?;

    if dto.number.trim().is_empty() {
        return Err(AppError::BadRequest("room number is required".to_string()));
    }
    if dto.capacity < 1 {
        return Err(AppError::BadRequest(
            "capacity must be at least 1".to_string(),
        ));
    }
    if dto.nightly_price.is_sign_negative() {
        return Err(AppError::BadRequest(
            "nightly price must not be negative".to_string(),
        ));
    }

    let params = CreateRoomParams {
        number: dto.number.trim().to_string(),
        room_type: parse_room_type(&dto.room_type)?,
        capacity: dto.capacity,
        nightly_price: dto.nightly_price,
        state: dto
            .state
            .as_deref()
            .map(parse_room_state)
            .transpose()?
            .unwrap_or(RoomState::Available),
    };

    let room = RoomRepository::new(&state.db)
        .create(params)
        .await
        .map_err(|err| {
            if is_unique_violation(&err, "number") {
                AppError::Conflict("room number already exists".to_string())
            } else {
                err.into()
            }
        })?;

    Ok((StatusCode::CREATED, Json(RoomDto::from_entity(room))))
}

/// GET /api/rooms
/// List rooms with optional type/state/min-capacity filters, ordered by
/// room number. Public read, as the room catalog feeds the guest UI.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    params(
        ("room_type" = Option<String>, Query, description = "Filter by room type"),
        ("state" = Option<String>, Query, description = "Filter by room state"),
        ("min_capacity" = Option<i32>, Query, description = "Minimum capacity"),
    ),
    responses(
        (status = 200, description = "Matching rooms", body = Vec<RoomDto>),
        (status = 400, description = "Unknown filter value", body = ErrorDto),
    ),
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = RoomFilter {
        room_type: query.room_type.as_deref().map(parse_room_type).transpose()?,
        state: query.state.as_deref().map(parse_room_state).transpose()?,
        min_capacity: query.min_capacity,
    };

    let rooms = RoomRepository::new(&state.db).list(filter).await?;

    let dtos: Vec<RoomDto> = rooms.into_iter().map(RoomDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/rooms/{id}
/// Get a room by ID. Admin only.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(ADMIN)?;

    let room = RoomRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok((StatusCode::OK, Json(RoomDto::from_entity(room))))
}

/// PUT /api/rooms/{id}
/// Whitelisted-field update of a room. Admin only.
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "The updated room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room number already exists", body = ErrorDto),
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(ADMIN)?;

    if let Some(capacity) = dto.capacity {
        if capacity < 1 {
            return Err(AppError::BadRequest(
                "capacity must be at least 1".to_string(),
            ));
        }
    }
    if let Some(price) = dto.nightly_price {
        if price.is_sign_negative() {
            return Err(AppError::BadRequest(
                "nightly price must not be negative".to_string(),
            ));
        }
    }

    let params = UpdateRoomParams {
        number: dto.number,
        room_type: dto.room_type.as_deref().map(parse_room_type).transpose()?,
        capacity: dto.capacity,
        nightly_price: dto.nightly_price,
        state: dto.state.as_deref().map(parse_room_state).transpose()?,
    };

    let room = RoomRepository::new(&state.db)
        .update(id, params)
        .await
        .map_err(|err| {
            if is_unique_violation(&err, "number") {
                AppError::Conflict("room number already exists".to_string())
            } else {
                AppError::from(err)
            }
        })?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok((StatusCode::OK, Json(RoomDto::from_entity(room))))
}

/// DELETE /api/rooms/{id}
/// Delete a room. Admin only. Reservation history keeps its rows; the
/// room reference is nulled by the schema.
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found", body = ErrorDto),
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(ADMIN)?;

    let deleted = RoomRepository::new(&state.db).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Room not found".to_string()))
    }
}

/// PATCH /api/rooms/{id}/state
/// Toggle a room between AVAILABLE and MAINTENANCE. Admin only.
#[utoipa::path(
    patch,
    path = "/api/rooms/{id}/state",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    request_body = SetRoomStateDto,
    responses(
        (status = 200, description = "The updated room", body = RoomDto),
        (status = 400, description = "Unknown room state", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
    ),
)]
pub async fn set_room_state(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(dto): Json<SetRoomStateDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(ADMIN)?;

    let new_state = parse_room_state(&dto.state)?;

    let room = RoomRepository::new(&state.db)
        .set_state(id, new_state)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok((StatusCode::OK, Json(RoomDto::from_entity(room))))
}
