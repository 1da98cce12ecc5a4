use sqlx::PgPool;

use crate::models::Room;

/// Column values for inserting or replacing a room.
pub struct RoomFields<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub capacity: i32,
    pub is_available: bool,
    pub features: &'a [String],
}

pub async fn list(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: i64,
) -> Result<Option<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn create(pool: &PgPool, fields: &RoomFields<'_>) -> Result<Room, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        "INSERT INTO rooms (name, description, capacity, is_available, features)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(fields.name)
    .bind(fields.description)
    .bind(fields.capacity)
    .bind(fields.is_available)
    .bind(fields.features)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    fields: &RoomFields<'_>,
) -> Result<Option<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        "UPDATE rooms
         SET name = $2, description = $3, capacity = $4, is_available = $5,
             features = $6, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(fields.name)
    .bind(fields.description)
    .bind(fields.capacity)
    .bind(fields.is_available)
    .bind(fields.features)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was deleted. Bookings of the room go with it.
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
