use crate::models::DbUser;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_user_by_username(pool: &Pool<Postgres>, username: &str) -> Result<Option<DbUser>> {
    tracing::debug!("Getting user by username: {}", username);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, username, name, email, bio, avatar, start_time, end_time,
               time_zone, week_start, hide_branding, theme, plan
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    if let Some(u) = &user {
        tracing::debug!("User found: id={}, plan={}", u.id, u.plan);
    } else {
        tracing::debug!("User not found: username={}", username);
    }

    Ok(user)
}
