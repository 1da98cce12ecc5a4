pub mod auth;
pub mod bookings;
pub mod rooms;
pub mod users;

use axum::Router;
use axum::routing::{get, post, put};

use crate::state::SharedState;

/// Routes reachable without a token.
pub fn public_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/rooms", get(rooms::list))
        .route("/api/rooms/{id}", get(rooms::get))
        .route("/api/rooms/{id}/availability", get(rooms::availability))
}

/// Routes under `/api/protected`; every handler takes an `AuthUser`.
pub fn protected_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/protected/bookings",
            get(bookings::list).post(bookings::create),
        )
        .route("/api/protected/rooms", post(rooms::create))
        .route(
            "/api/protected/rooms/{id}",
            put(rooms::update).delete(rooms::delete),
        )
        .route("/api/protected/users/me", get(users::me))
}
