use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::client::ClientDto,
    server::{
        data::client::ClientRepository,
        error::AppError,
        middleware::auth::{AuthGuard, STAFF},
        state::AppState,
    },
};

#[derive(Deserialize, Default)]
pub struct ClientListQuery {
    /// Free-text search over name, phone, email, and document number.
    pub q: Option<String>,
}

/// GET /api/clients
/// List clients, newest first, optionally filtered by a free-text query.
pub async fn list_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ClientListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let clients = ClientRepository::new(&state.db)
        .list(query.q.as_deref())
        .await?;

    let dtos: Vec<ClientDto> = clients.into_iter().map(ClientDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/clients/{id}
/// Get a client by ID.
pub async fn get_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let client = ClientRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

    Ok((StatusCode::OK, Json(ClientDto::from_entity(client))))
}
