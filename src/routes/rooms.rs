use axum::extract::State;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::booking::{self, Availability, TimeRange};
use crate::db;
use crate::db::rooms::RoomFields;
use crate::error::AppError;
use crate::extract::{Json, Path, Query};
use crate::models::Room;
use crate::state::SharedState;
use crate::validation;

#[derive(Deserialize)]
pub struct RoomRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub capacity: i32,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub features: Vec<String>,
}

fn default_available() -> bool {
    true
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = db::rooms::list(&state.pool).await?;
    Ok(Json(rooms))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Room>, AppError> {
    let room = db::rooms::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(room_not_found)?;
    Ok(Json(room))
}

pub async fn availability(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Availability>, AppError> {
    let range = TimeRange::new(query.start_time, query.end_time)?;

    db::rooms::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(room_not_found)?;

    let availability = booking::availability::check(&state.pool, id, &range).await?;
    Ok(Json(availability))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<RoomRequest>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    auth.require_admin()?;
    validation::validate_room(&req.name, req.capacity)?;

    let features = validation::normalize_features(req.features);
    let room = db::rooms::create(
        &state.pool,
        &RoomFields {
            name: req.name.trim(),
            description: &req.description,
            capacity: req.capacity,
            is_available: req.is_available,
            features: &features,
        },
    )
    .await?;

    tracing::info!(room_id = room.id, admin_id = auth.user_id, "Room created");

    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<RoomRequest>,
) -> Result<Json<Room>, AppError> {
    auth.require_admin()?;
    validation::validate_room(&req.name, req.capacity)?;

    let features = validation::normalize_features(req.features);
    let room = db::rooms::update(
        &state.pool,
        id,
        &RoomFields {
            name: req.name.trim(),
            description: &req.description,
            capacity: req.capacity,
            is_available: req.is_available,
            features: &features,
        },
    )
    .await?
    .ok_or_else(room_not_found)?;

    tracing::info!(room_id = room.id, admin_id = auth.user_id, "Room updated");

    Ok(Json(room))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    auth.require_admin()?;

    if !db::rooms::delete(&state.pool, id).await? {
        return Err(room_not_found());
    }

    tracing::info!(room_id = id, admin_id = auth.user_id, "Room deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn room_not_found() -> AppError {
    AppError::NotFound("Ruangan tidak ditemukan".to_string())
}
