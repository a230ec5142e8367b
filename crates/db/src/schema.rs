use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            username VARCHAR(255) NOT NULL UNIQUE,
            name VARCHAR(255) NULL,
            email VARCHAR(255) NULL UNIQUE,
            bio TEXT NULL,
            avatar TEXT NULL,
            start_time INTEGER NOT NULL DEFAULT 0,
            end_time INTEGER NOT NULL DEFAULT 1440,
            time_zone VARCHAR(255) NOT NULL DEFAULT 'Europe/London',
            week_start VARCHAR(32) NOT NULL DEFAULT 'Sunday',
            hide_branding BOOLEAN NOT NULL DEFAULT FALSE,
            theme VARCHAR(32) NULL,
            plan VARCHAR(16) NOT NULL DEFAULT 'PRO',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_plan CHECK (plan IN ('FREE', 'TRIAL', 'PRO'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create event_types table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS event_types (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            slug VARCHAR(255) NOT NULL,
            title VARCHAR(255) NOT NULL,
            description TEXT NULL,
            length INTEGER NOT NULL,
            hidden BOOLEAN NOT NULL DEFAULT FALSE,
            time_zone VARCHAR(255) NULL,
            period_type VARCHAR(16) NOT NULL DEFAULT 'unlimited',
            period_days INTEGER NULL,
            period_start_date TIMESTAMP WITH TIME ZONE NULL,
            period_end_date TIMESTAMP WITH TIME ZONE NULL,
            period_count_calendar_days BOOLEAN NULL,
            minimum_booking_notice INTEGER NOT NULL DEFAULT 120,
            CONSTRAINT unique_user_slug UNIQUE (user_id, slug),
            CONSTRAINT valid_period_type CHECK (period_type IN ('unlimited', 'rolling', 'range'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create availability table; a row belongs to a user or to an event type
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability (
            id SERIAL PRIMARY KEY,
            label VARCHAR(255) NULL,
            user_id INTEGER NULL REFERENCES users(id) ON DELETE CASCADE,
            event_type_id INTEGER NULL REFERENCES event_types(id) ON DELETE CASCADE,
            days INTEGER[] NOT NULL,
            start_time INTEGER NOT NULL,
            end_time INTEGER NOT NULL,
            CONSTRAINT valid_owner CHECK (user_id IS NOT NULL OR event_type_id IS NOT NULL),
            CONSTRAINT valid_window CHECK (start_time >= 0 AND end_time <= 1440 AND end_time >= start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per query
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_event_types_user_id ON event_types(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_availability_user_id ON availability(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_availability_event_type_id ON availability(event_type_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
