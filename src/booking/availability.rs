use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db;
use crate::error::AppError;

/// A proposed booking interval, `[start, end)`. Construction guarantees `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AppError> {
        if end <= start {
            return Err(AppError::BadRequest(
                "Waktu selesai harus setelah waktu mulai".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Availability {
    pub room_id: i64,
    pub available: bool,
    pub conflicting_count: i64,
}

/// Count the confirmed bookings of `room_id` overlapping `range`.
pub async fn check<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    room_id: i64,
    range: &TimeRange,
) -> Result<Availability, sqlx::Error> {
    let conflicting_count =
        db::bookings::count_conflicts(executor, room_id, range.start(), range.end()).await?;

    Ok(Availability {
        room_id,
        available: conflicting_count == 0,
        conflicting_count,
    })
}
