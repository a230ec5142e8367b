use async_trait::async_trait;
use eyre::Result;

use crate::models::{
    event_type::{EventType, EventTypeSummary},
    user::User,
};

/// Read access to users and event types.
///
/// Implementations return `Ok(None)` for missing rows and reserve `Err` for
/// failures of the store itself. Embedded availability lists must be complete:
/// a user's list holds only user-level windows, an event type's list only the
/// windows scoped to that event type.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Looks up a user by exact username.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Looks up an event type by its owner and slug.
    async fn find_event_type(&self, user_id: i32, slug: &str) -> Result<Option<EventType>>;

    /// Returns the id of the user's earliest event type, by ascending id.
    async fn find_first_event_type_id(&self, user_id: i32) -> Result<Option<i32>>;

    /// Lists the user's event types by ascending id, hidden ones included.
    async fn list_event_types(
        &self,
        user_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<EventTypeSummary>>;
}
