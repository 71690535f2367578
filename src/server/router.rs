use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::server::{
    controller::{client, invoice, reservation, room},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // Guest channel: no authentication.
        .route("/api/guest/availability", get(reservation::check_availability))
        .route("/api/guest/reservations", post(reservation::create_request))
        .route(
            "/api/guest/reservations/{id}/status",
            get(reservation::get_status),
        )
        // Reception: reservation lifecycle.
        .route(
            "/api/reception/availability",
            get(reservation::check_availability_staff),
        )
        .route(
            "/api/reception/reservations",
            post(reservation::create_walk_in).get(reservation::list_reservations),
        )
        .route(
            "/api/reception/reservations/pending",
            get(reservation::list_pending),
        )
        .route(
            "/api/reception/reservations/today-checkins",
            get(reservation::list_today_checkins),
        )
        .route(
            "/api/reception/reservations/today-checkouts",
            get(reservation::list_today_checkouts),
        )
        .route(
            "/api/reception/reservations/{id}",
            get(reservation::get_reservation),
        )
        .route(
            "/api/reception/reservations/{id}/confirm",
            patch(reservation::confirm_reservation),
        )
        .route(
            "/api/reception/reservations/{id}/cancel",
            patch(reservation::cancel_reservation),
        )
        .route(
            "/api/reception/reservations/{id}/check-in",
            patch(reservation::check_in),
        )
        .route(
            "/api/reception/reservations/{id}/check-out",
            patch(reservation::check_out),
        )
        // Rooms: admin management, public catalog read.
        .route("/api/rooms", post(room::create_room).get(room::list_rooms))
        .route(
            "/api/rooms/{id}",
            get(room::get_room).put(room::update_room).delete(room::delete_room),
        )
        .route("/api/rooms/{id}/state", patch(room::set_room_state))
        // Clients and invoices: staff read side.
        .route("/api/clients", get(client::list_clients))
        .route("/api/clients/{id}", get(client::get_client))
        .route("/api/invoices", get(invoice::list_invoices))
        .route("/api/invoices/{id}", get(invoice::get_invoice))
}
