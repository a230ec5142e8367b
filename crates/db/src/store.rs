use async_trait::async_trait;
use booking_core::{
    models::{
        event_type::{EventType, EventTypeSummary},
        user::User,
    },
    store::BookingStore,
};
use eyre::Result;

use crate::{
    DbPool,
    repositories::{availability, event_type, user},
};

/// [`BookingStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let Some(row) = user::get_user_by_username(&self.pool, username).await? else {
            return Ok(None);
        };

        let windows = availability::get_user_availability(&self.pool, row.id).await?;
        row.into_user(windows).map(Some)
    }

    async fn find_event_type(&self, user_id: i32, slug: &str) -> Result<Option<EventType>> {
        let Some(row) =
            event_type::get_event_type_by_user_and_slug(&self.pool, user_id, slug).await?
        else {
            return Ok(None);
        };

        let windows = availability::get_event_type_availability(&self.pool, row.id).await?;
        row.into_event_type(windows).map(Some)
    }

    async fn find_first_event_type_id(&self, user_id: i32) -> Result<Option<i32>> {
        event_type::get_first_event_type_id(&self.pool, user_id).await
    }

    async fn list_event_types(
        &self,
        user_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<EventTypeSummary>> {
        let rows = event_type::get_event_types_by_user_id(&self.pool, user_id, limit).await?;
        Ok(rows.into_iter().map(EventTypeSummary::from).collect())
    }
}
