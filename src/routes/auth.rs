use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{Claims, encode_token};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::extract::Json;
use crate::models::Role;
use crate::state::SharedState;
use crate::validation;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let email = validation::normalize_email(&req.email);
    validation::validate_registration(&req.name, &email, &req.password)?;

    let pw_hash = password::hash_blocking(req.password)
        .await
        .map_err(AppError::Internal)?;

    // Advisory lock serializes the first-account check across concurrent registrations
    let mut tx = state.pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock(1)")
        .execute(&mut *tx)
        .await?;

    let role = if db::users::count_all(&mut *tx).await? == 0 {
        Role::Admin
    } else {
        Role::User
    };

    let user = db::users::create(&mut *tx, req.name.trim(), &email, &pw_hash, role)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Email sudah terdaftar".to_string())
            }
            _ => AppError::Database(e),
        })?;

    tx.commit().await?;

    tracing::info!(user_id = user.id, role = role.as_str(), "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Pengguna berhasil terdaftar!".to_string(),
            user_id: user.id,
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = validation::normalize_email(&req.email);
    if email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email dan password wajib diisi".to_string(),
        ));
    }
    if !validation::is_valid_email(&email) {
        return Err(AppError::BadRequest("Format email tidak valid".to_string()));
    }

    if state.login_limiter.check(&email).is_err() {
        return Err(AppError::RateLimited(
            "Terlalu banyak percobaan login. Silakan coba lagi nanti.".to_string(),
        ));
    }

    let Some(user) = db::users::find_by_email(&state.pool, &email).await? else {
        state.login_limiter.record_failure(&email);
        return Err(invalid_credentials());
    };

    let valid = password::verify_blocking(req.password, user.password_hash.clone())
        .await
        .map_err(AppError::Internal)?;

    if !valid {
        state.login_limiter.record_failure(&email);
        return Err(invalid_credentials());
    }

    state.login_limiter.clear(&email);

    let claims = Claims::new(user.id, user.name.clone(), user.role);
    let token = encode_token(&claims, &state.config.jwt_secret)?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login berhasil!".to_string(),
        token,
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Email atau password salah".to_string())
}
