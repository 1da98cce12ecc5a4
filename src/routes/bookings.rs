use axum::extract::State;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::booking::{self, TimeRange};
use crate::db;
use crate::error::AppError;
use crate::extract::Json;
use crate::models::BookingDetails;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateBooking {
    pub room_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub purpose: String,
}

#[derive(Serialize)]
pub struct BookingCreated {
    pub message: String,
    pub booking_id: i64,
    pub room_name: String,
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateBooking>,
) -> Result<(StatusCode, Json<BookingCreated>), AppError> {
    // Ordering is checked before touching the store.
    let range = TimeRange::new(req.start_time, req.end_time)?;

    let reservation =
        booking::reserve(&state.pool, auth.user_id, req.room_id, &range, req.purpose.trim())
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreated {
            message: "Booking berhasil dibuat!".to_string(),
            booking_id: reservation.booking.id,
            room_name: reservation.room_name,
        }),
    ))
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<BookingDetails>>, AppError> {
    let bookings = db::bookings::list_details(&state.pool).await?;
    Ok(Json(bookings))
}
