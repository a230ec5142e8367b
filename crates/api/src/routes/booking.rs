use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/booking.eventByUserAndType",
            get(handlers::booking::event_by_user_and_type),
        )
        .route(
            "/api/booking.userAndEventTypes",
            get(handlers::booking::user_and_event_types),
        )
}
