use async_trait::async_trait;
use booking_core::models::{
    event_type::{EventType, EventTypeSummary},
    user::User,
};
use mockall::mock;

// Mock store for testing
mock! {
    pub BookingStore {}

    #[async_trait]
    impl booking_core::store::BookingStore for BookingStore {
        async fn find_user_by_username(&self, username: &str) -> eyre::Result<Option<User>>;

        async fn find_event_type(
            &self,
            user_id: i32,
            slug: &str,
        ) -> eyre::Result<Option<EventType>>;

        async fn find_first_event_type_id(&self, user_id: i32) -> eyre::Result<Option<i32>>;

        async fn list_event_types(
            &self,
            user_id: i32,
            limit: Option<i64>,
        ) -> eyre::Result<Vec<EventTypeSummary>>;
    }
}
