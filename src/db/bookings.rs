use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{Booking, BookingDetails, BookingStatus};

/// Count confirmed bookings of a room whose interval overlaps `[start, end)`.
///
/// Intervals are half-open: a booking ending exactly at `start` does not count.
pub async fn count_conflicts<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    room_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM bookings
         WHERE room_id = $1 AND status = $2 AND start_time < $3 AND end_time > $4",
    )
    .bind(room_id)
    .bind(BookingStatus::Confirmed.as_str())
    .bind(end)
    .bind(start)
    .fetch_one(executor)
    .await?;
    Ok(row.0)
}

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    user_id: i64,
    room_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    purpose: &str,
) -> Result<Booking, sqlx::Error> {
    sqlx::query_as::<_, Booking>(
        "INSERT INTO bookings (user_id, room_id, start_time, end_time, status, purpose)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(user_id)
    .bind(room_id)
    .bind(start)
    .bind(end)
    .bind(BookingStatus::Confirmed.as_str())
    .bind(purpose)
    .fetch_one(executor)
    .await
}

pub async fn list_details(pool: &PgPool) -> Result<Vec<BookingDetails>, sqlx::Error> {
    sqlx::query_as::<_, BookingDetails>(
        "SELECT b.id, r.name AS room_name, u.name AS user_name,
                b.start_time, b.end_time, b.purpose, b.status
         FROM bookings b
         JOIN rooms r ON r.id = b.room_id
         JOIN users u ON u.id = b.user_id
         ORDER BY b.start_time DESC, b.id DESC",
    )
    .fetch_all(pool)
    .await
}
