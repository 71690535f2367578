use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::reservation::{
        AvailabilityDto, CheckOutResponseDto, CheckoutOverviewDto, CreateReservationDto,
        ReservationDto, ReservationSummaryDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, RECEPTION, STAFF},
        model::{
            client::UpsertClientParams,
            reservation::{ReservationFilter, StayRequest},
        },
        service::reservation::ReservationService,
        state::AppState,
        util::parse::{
            parse_channel, parse_document_type, parse_reservation_status, parse_room_type,
        },
    },
};

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub room_type: String,
    pub party_size: i32,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
}

#[derive(Deserialize, Default)]
pub struct ReservationListQuery {
    pub status: Option<String>,
    pub channel: Option<String>,
    pub room_type: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Builds the validated stay request from an availability query.
fn stay_from_query(query: &AvailabilityQuery) -> Result<StayRequest, AppError> {
    StayRequest::new(
        parse_room_type(&query.room_type)?,
        query.party_size,
        query.arrival_date,
        query.departure_date,
    )
}

/// Builds the validated stay request and client params from a creation
/// payload. Everything is rejected before any persistence happens.
fn stay_and_client_from_dto(
    dto: &CreateReservationDto,
) -> Result<(StayRequest, UpsertClientParams), AppError> {
    let stay = StayRequest::new(
        parse_room_type(&dto.room_type)?,
        dto.party_size,
        dto.arrival_date,
        dto.departure_date,
    )?;

    let client = UpsertClientParams::new(
        &dto.client.full_name,
        &dto.client.phone,
        &dto.client.email,
        parse_document_type(&dto.client.document_type)?,
        &dto.client.document_number,
    )?;

    Ok((stay, client))
}

fn filter_from_query(query: ReservationListQuery) -> Result<ReservationFilter, AppError> {
    Ok(ReservationFilter {
        status: query.status.as_deref().map(parse_reservation_status).transpose()?,
        channel: query.channel.as_deref().map(parse_channel).transpose()?,
        room_type: query.room_type.as_deref().map(parse_room_type).transpose()?,
        from: query.from,
        to: query.to,
    })
}

/// GET /api/guest/availability
/// Guest-facing availability check; no authentication.
///
/// "No room available" is a 200 with `available: false`, never an error.
pub async fn check_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let stay = stay_from_query(&query)?;

    let nightly_price = ReservationService::new(&state.db)
        .check_availability(&stay)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AvailabilityDto {
            available: nightly_price.is_some(),
            nightly_price,
        }),
    ))
}

/// GET /api/reception/availability
/// Same availability answer for logged-in staff.
pub async fn check_availability_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let stay = stay_from_query(&query)?;

    let nightly_price = ReservationService::new(&state.db)
        .check_availability(&stay)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AvailabilityDto {
            available: nightly_price.is_some(),
            nightly_price,
        }),
    ))
}

/// POST /api/guest/reservations
/// Guest request channel: creates a pending, unassigned reservation.
pub async fn create_request(
    State(state): State<AppState>,
    Json(dto): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let (stay, client) = stay_and_client_from_dto(&dto)?;

    let reservation = ReservationService::new(&state.db)
        .create_request(stay, client)
        .await?;

    Ok((StatusCode::CREATED, Json(ReservationDto::from_entity(reservation))))
}

/// GET /api/guest/reservations/{id}/status
/// Reduced status view for the guest who submitted the request.
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let details = ReservationService::new(&state.db).get_details(id).await?;

    Ok((
        StatusCode::OK,
        Json(ReservationSummaryDto::from_details(details)),
    ))
}

/// POST /api/reception/reservations
/// Walk-in channel: allocates synchronously and creates the reservation
/// already confirmed. 409 when no room qualifies.
pub async fn create_walk_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(RECEPTION)?;

    let (stay, client) = stay_and_client_from_dto(&dto)?;

    let reservation = ReservationService::new(&state.db)
        .create_walk_in(stay, client)
        .await?;

    Ok((StatusCode::CREATED, Json(ReservationDto::from_entity(reservation))))
}

/// GET /api/reception/reservations
/// Filtered reservation listing for staff, newest created first.
pub async fn list_reservations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReservationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let filter = filter_from_query(query)?;
    let details = ReservationService::new(&state.db).list(filter).await?;

    let dtos: Vec<ReservationDto> = details.into_iter().map(ReservationDto::from_details).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/reception/reservations/pending
/// Pending online requests awaiting confirmation.
pub async fn list_pending(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let details = ReservationService::new(&state.db).list_pending().await?;

    let dtos: Vec<ReservationDto> = details.into_iter().map(ReservationDto::from_details).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/reception/reservations/today-checkins
/// Confirmed reservations arriving today.
pub async fn list_today_checkins(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let details = ReservationService::new(&state.db).list_today_checkins().await?;

    let dtos: Vec<ReservationDto> = details.into_iter().map(ReservationDto::from_details).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/reception/reservations/today-checkouts
/// Reservations departing today, each annotated with its invoice ID when
/// check-out has already produced one.
pub async fn list_today_checkouts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let overviews = ReservationService::new(&state.db).list_today_checkouts().await?;

    let dtos: Vec<CheckoutOverviewDto> = overviews
        .into_iter()
        .map(CheckoutOverviewDto::from_overview)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/reception/reservations/{id}
/// Full reservation view for staff, with client and room joined.
pub async fn get_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(STAFF)?;

    let details = ReservationService::new(&state.db).get_details(id).await?;

    Ok((StatusCode::OK, Json(ReservationDto::from_details(details))))
}

/// PATCH /api/reception/reservations/{id}/confirm
/// Promotes a pending request: allocation engine, then Confirmed.
pub async fn confirm_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(RECEPTION)?;

    let reservation = ReservationService::new(&state.db).confirm(id).await?;

    Ok((StatusCode::OK, Json(ReservationDto::from_entity(reservation))))
}

/// PATCH /api/reception/reservations/{id}/cancel
/// Cancels a reservation that has not been checked in yet.
pub async fn cancel_reservation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(RECEPTION)?;

    let reservation = ReservationService::new(&state.db).cancel(id).await?;

    Ok((StatusCode::OK, Json(ReservationDto::from_entity(reservation))))
}

/// PATCH /api/reception/reservations/{id}/check-in
/// Moves a confirmed reservation in-house.
pub async fn check_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(RECEPTION)?;

    let reservation = ReservationService::new(&state.db).check_in(id).await?;

    Ok((StatusCode::OK, Json(ReservationDto::from_entity(reservation))))
}

/// PATCH /api/reception/reservations/{id}/check-out
/// Terminal transition: issues the invoice and returns both records.
pub async fn check_out(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.token_verifier, &headers).require(RECEPTION)?;

    let (reservation, invoice) = ReservationService::new(&state.db).check_out(id).await?;

    Ok((
        StatusCode::OK,
        Json(CheckOutResponseDto {
            reservation: ReservationDto::from_entity(reservation),
            invoice: crate::model::invoice::InvoiceDto::from_entity(invoice),
        }),
    ))
}
