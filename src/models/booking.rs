use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Only `confirmed` exists today; cancellation is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
        }
    }
}

impl TryFrom<String> for BookingStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "confirmed" => Ok(BookingStatus::Confirmed),
            other => Err(format!("unknown booking status: {other}")),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[sqlx(try_from = "String")]
    pub status: BookingStatus,
    pub purpose: String,
    pub created_at: DateTime<Utc>,
}

/// A booking joined with the names of its room and owner, as listed to clients.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct BookingDetails {
    pub id: i64,
    pub room_name: String,
    pub user_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub purpose: String,
    #[sqlx(try_from = "String")]
    pub status: BookingStatus,
}
