use crate::models::{DbEventType, DbEventTypeSummary};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_event_type_by_user_and_slug(
    pool: &Pool<Postgres>,
    user_id: i32,
    slug: &str,
) -> Result<Option<DbEventType>> {
    tracing::debug!("Getting event type: user_id={}, slug={}", user_id, slug);

    let event_type = sqlx::query_as::<_, DbEventType>(
        r#"
        SELECT id, user_id, slug, title, description, length, hidden, time_zone,
               period_type, period_days, period_start_date, period_end_date,
               period_count_calendar_days, minimum_booking_notice
        FROM event_types
        WHERE user_id = $1 AND slug = $2
        "#,
    )
    .bind(user_id)
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(event_type)
}

pub async fn get_first_event_type_id(pool: &Pool<Postgres>, user_id: i32) -> Result<Option<i32>> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT id
        FROM event_types
        WHERE user_id = $1
        ORDER BY id ASC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(id)
}

/// Lists event types by ascending id; `limit` of `None` returns all of them.
pub async fn get_event_types_by_user_id(
    pool: &Pool<Postgres>,
    user_id: i32,
    limit: Option<i64>,
) -> Result<Vec<DbEventTypeSummary>> {
    let event_types = sqlx::query_as::<_, DbEventTypeSummary>(
        r#"
        SELECT id, slug, title, length, description, hidden
        FROM event_types
        WHERE user_id = $1
        ORDER BY id ASC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(event_types)
}
