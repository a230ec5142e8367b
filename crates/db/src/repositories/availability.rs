use crate::models::DbAvailability;
use eyre::Result;
use sqlx::{Pool, Postgres};

/// User-level windows; rows scoped to one of the user's event types are excluded.
pub async fn get_user_availability(
    pool: &Pool<Postgres>,
    user_id: i32,
) -> Result<Vec<DbAvailability>> {
    let windows = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, label, user_id, event_type_id, days, start_time, end_time
        FROM availability
        WHERE user_id = $1 AND event_type_id IS NULL
        ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(windows)
}

pub async fn get_event_type_availability(
    pool: &Pool<Postgres>,
    event_type_id: i32,
) -> Result<Vec<DbAvailability>> {
    let windows = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, label, user_id, event_type_id, days, start_time, end_time
        FROM availability
        WHERE event_type_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(event_type_id)
    .fetch_all(pool)
    .await?;

    Ok(windows)
}
