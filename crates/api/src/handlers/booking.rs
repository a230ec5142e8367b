//! # Booking Handlers
//!
//! RPC-style queries behind the public booking pages. Both endpoints answer
//! `200 OK` with JSON `null` when nothing is bookable, so clients cannot tell
//! an unknown user from a hidden or plan-restricted event type. Store failures
//! surface as `500`.

use axum::{
    extract::{Query, State},
    Json,
};
use booking_core::resolver::{self, ResolvedEvent, UserEventTypes};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for `booking.eventByUserAndType`
#[derive(Debug, Deserialize)]
pub struct EventByUserAndTypeQuery {
    /// Username, matched case-insensitively
    pub user: String,

    /// Event type slug, matched exactly
    #[serde(rename = "type")]
    pub event_type: String,
}

/// Query parameters for `booking.userAndEventTypes`
#[derive(Debug, Deserialize)]
pub struct UserAndEventTypesQuery {
    pub user: String,
}

/// Resolves the booking page of one event type.
///
/// # Endpoint
///
/// ```text
/// GET /api/booking.eventByUserAndType?user=alice&type=intro
/// ```
#[axum::debug_handler]
pub async fn event_by_user_and_type(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EventByUserAndTypeQuery>,
) -> Result<Json<Option<ResolvedEvent>>, AppError> {
    debug!("Resolving event {}/{}", query.user, query.event_type);

    let resolved =
        resolver::event_by_user_and_type(state.store.as_ref(), &query.user, &query.event_type)
            .await?;

    Ok(Json(resolved))
}

/// Lists the event types on a user's public profile.
///
/// # Endpoint
///
/// ```text
/// GET /api/booking.userAndEventTypes?user=alice
/// ```
#[axum::debug_handler]
pub async fn user_and_event_types(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<UserAndEventTypesQuery>,
) -> Result<Json<Option<UserEventTypes>>, AppError> {
    debug!("Listing event types of {}", query.user);

    let listed = resolver::user_and_event_types(state.store.as_ref(), &query.user).await?;

    Ok(Json(listed))
}
