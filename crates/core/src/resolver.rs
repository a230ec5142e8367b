//! # Availability Resolver
//!
//! Decides whether a `(user, event type)` pair is publicly bookable and, if
//! so, which weekly windows its booking page offers.
//!
//! Working hours are chosen with this precedence:
//!
//! 1. windows configured on the event type
//! 2. windows configured on the user
//! 3. a single all-week window spanning the user's default start and end time
//!
//! Every "not bookable" outcome (unknown user, unknown slug, hidden event type,
//! or an event type beyond the free plan's first one) is reported as `Ok(None)`.
//! Only store failures are errors.

use serde::Serialize;
use tracing::debug;

use crate::{
    errors::BookingResult,
    models::{
        availability::Availability,
        event_type::{EventType, EventTypeSummary},
        user::{PublicProfile, User, UserPlan},
    },
    store::BookingStore,
};

/// Everything a booking page needs for one event type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEvent {
    pub user: User,
    pub event_type: EventType,
    /// Effective windows, ascending by start time
    pub working_hours: Vec<Availability>,
}

/// A user's profile with the event types it publicly lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEventTypes {
    pub user: PublicProfile,
    pub event_types: Vec<EventTypeSummary>,
}

/// Resolves the booking page for `username` and event-type `slug`.
///
/// The username is matched case-insensitively by lower-casing it before the
/// lookup; the slug must match exactly. Store calls run strictly in sequence:
/// user, event type, then (free plan only) the user's first event type id.
pub async fn event_by_user_and_type(
    store: &dyn BookingStore,
    username: &str,
    slug: &str,
) -> BookingResult<Option<ResolvedEvent>> {
    let username = username.to_lowercase();

    let Some(user) = store.find_user_by_username(&username).await? else {
        debug!("No user named {}", username);
        return Ok(None);
    };

    let event_type = match store.find_event_type(user.id, slug).await? {
        Some(event_type) if !event_type.hidden => event_type,
        Some(_) => {
            debug!("Event type {}/{} is hidden", username, slug);
            return Ok(None);
        }
        None => {
            debug!("No event type {}/{}", username, slug);
            return Ok(None);
        }
    };

    if user.plan == UserPlan::Free {
        let first_id = store.find_first_event_type_id(user.id).await?;
        if first_id != Some(event_type.id) {
            debug!(
                "Event type {} is not the first of free user {} (first: {:?})",
                event_type.id, user.id, first_id
            );
            return Ok(None);
        }
    }

    let working_hours = working_hours(&event_type, &user);

    Ok(Some(ResolvedEvent {
        user,
        event_type,
        working_hours,
    }))
}

/// Lists the event types shown on `username`'s public profile.
///
/// Free users list at most their first event type, and only if it is not
/// hidden. Unlike [`event_by_user_and_type`] the username must match exactly.
pub async fn user_and_event_types(
    store: &dyn BookingStore,
    username: &str,
) -> BookingResult<Option<UserEventTypes>> {
    let Some(user) = store.find_user_by_username(username).await? else {
        debug!("No user named {}", username);
        return Ok(None);
    };

    let limit = match user.plan {
        UserPlan::Free => Some(1),
        UserPlan::Trial | UserPlan::Pro => None,
    };

    let event_types = store
        .list_event_types(user.id, limit)
        .await?
        .into_iter()
        .filter(|event_type| !event_type.hidden)
        .collect();

    Ok(Some(UserEventTypes {
        user: user.into(),
        event_types,
    }))
}

/// Applies the working-hour precedence and orders the result by start time.
///
/// The sort is stable, so windows sharing a start time keep their stored order.
pub fn working_hours(event_type: &EventType, user: &User) -> Vec<Availability> {
    let mut windows = if !event_type.availability.is_empty() {
        event_type.availability.clone()
    } else if !user.availability.is_empty() {
        user.availability.clone()
    } else {
        vec![Availability::all_week(user.start_time, user.end_time)]
    };

    windows.sort_by_key(|window| window.start_time);
    windows
}
