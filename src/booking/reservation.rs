use sqlx::PgPool;

use crate::booking::availability::{self, TimeRange};
use crate::db;
use crate::error::AppError;
use crate::models::Booking;

const SLOT_TAKEN: &str = "Ruangan tidak tersedia pada jadwal yang dipilih (konflik)";

/// SQLSTATE raised by the bookings exclusion constraint.
const EXCLUSION_VIOLATION: &str = "23P01";

pub struct Reservation {
    pub booking: Booking,
    pub room_name: String,
}

/// Book `range` in `room_id` for `user_id`.
///
/// The room lookup, the overlap check and the insert share one transaction.
/// Two requests for overlapping slots can both pass the check; the exclusion
/// constraint then rejects the later insert, which is reported as a conflict.
/// Bookings that do not overlap never block each other.
pub async fn reserve(
    pool: &PgPool,
    user_id: i64,
    room_id: i64,
    range: &TimeRange,
    purpose: &str,
) -> Result<Reservation, AppError> {
    let mut tx = pool.begin().await?;

    let room = db::rooms::find_by_id(&mut *tx, room_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ruangan tidak ditemukan".to_string()))?;

    if !room.is_available {
        return Err(AppError::Conflict(
            "Ruangan sedang tidak tersedia untuk dipesan".to_string(),
        ));
    }

    let availability = availability::check(&mut *tx, room_id, range).await?;

    if !availability.available {
        tracing::info!(
            room_id,
            conflicts = availability.conflicting_count,
            "Booking rejected: slot overlaps existing booking"
        );
        return Err(AppError::Conflict(SLOT_TAKEN.to_string()));
    }

    let booking = db::bookings::create(
        &mut *tx,
        user_id,
        room_id,
        range.start(),
        range.end(),
        purpose,
    )
    .await
    .map_err(conflict_or_database)?;

    tx.commit().await?;

    tracing::info!(booking_id = booking.id, room_id, user_id, "Booking confirmed");

    Ok(Reservation {
        booking,
        room_name: room.name,
    })
}

fn conflict_or_database(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err)
            if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) =>
        {
            tracing::warn!("Concurrent booking lost the race: {db_err}");
            AppError::Conflict(SLOT_TAKEN.to_string())
        }
        _ => AppError::Database(err),
    }
}
