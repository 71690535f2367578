use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::invoice::InvoiceDetailsDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, STAFF},
        model::invoice::InvoiceFilter,
        service::invoice::InvoiceService,
        state::AppState,
    },
};

#[derive(Deserialize, Default)]
pub struct InvoiceListQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub invoice_number: Option<String>,
    pub reservation_number: Option<String>,
    /// Free-text search over the billed client's name.
    pub q: Option<String>,
}

/// GET /api/invoices
/// List invoices, newest first, joined with reservation/client/room and
/// filtered by date range, invoice number, reservation number, and client
/// name.
pub async fn list_invoices(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<InvoiceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let filter = InvoiceFilter {
        from: query.from,
        to: query.to,
        invoice_number: query.invoice_number,
        reservation_number: query.reservation_number,
        client_name: query.q,
    };

    let details = InvoiceService::new(&state.db).list(filter).await?;

    let dtos: Vec<InvoiceDetailsDto> = details
        .into_iter()
        .map(InvoiceDetailsDto::from_details)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/invoices/{id}
/// Get an invoice by ID, joined with its reservation, client, and room.
pub async fn get_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let details = InvoiceService::new(&state.db).get_details(id).await?;

    Ok((StatusCode::OK, Json(InvoiceDetailsDto::from_details(details))))
}
