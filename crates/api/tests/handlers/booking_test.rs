use axum::http::StatusCode;
use booking_core::models::{
    availability::Availability,
    event_type::{EventTypeSummary, PeriodType},
    user::UserPlan,
};
use chrono::{TimeZone, Utc};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{event_type, get_json, user, TestContext};

fn summary(id: i32, slug: &str, hidden: bool) -> EventTypeSummary {
    EventTypeSummary {
        id,
        slug: slug.to_string(),
        title: slug.to_string(),
        length: 30,
        description: None,
        hidden,
    }
}

#[tokio::test]
async fn test_event_resolves_with_default_working_hours() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .withf(|username| username == "alice")
        .times(1)
        .returning(|_| Ok(Some(user(1, "alice", UserPlan::Pro))));
    ctx.store
        .expect_find_event_type()
        .withf(|user_id, slug| *user_id == 1 && slug == "intro")
        .times(1)
        .returning(|_, _| Ok(Some(event_type(10, 1, "intro"))));
    ctx.store.expect_find_first_event_type_id().times(0);

    let (status, body) = get_json(
        ctx.into_app(),
        "/api/booking.eventByUserAndType?user=Alice&type=intro",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], json!("alice"));
    assert_eq!(body["user"]["startTime"], json!(540));
    assert_eq!(body["eventType"]["id"], json!(10));
    assert_eq!(body["eventType"]["minimumBookingNotice"], json!(120));
    assert_eq!(body["eventType"]["periodStartDate"], Value::Null);
    assert!(body["eventType"].get("userId").is_none());
    assert!(body["eventType"].get("slug").is_none());
    assert_eq!(
        body["workingHours"],
        json!([{ "days": [0, 1, 2, 3, 4, 5, 6], "startTime": 540, "endTime": 1020 }])
    );
}

#[tokio::test]
async fn test_event_type_windows_are_sorted_by_start_time() {
    let mut ctx = TestContext::new();
    let mut alice = user(1, "alice", UserPlan::Pro);
    alice.availability = vec![Availability::new(vec![6], 60, 120)];
    let mut intro = event_type(10, 1, "intro");
    intro.availability = vec![
        Availability::new(vec![1], 840, 960),
        Availability::new(vec![2], 540, 600),
    ];
    intro.period_type = PeriodType::Range;
    intro.period_start_date = Some(Utc.with_ymd_and_hms(2021, 7, 1, 9, 30, 0).unwrap());

    ctx.store
        .expect_find_user_by_username()
        .returning(move |_| Ok(Some(alice.clone())));
    ctx.store
        .expect_find_event_type()
        .returning(move |_, _| Ok(Some(intro.clone())));

    let (status, body) = get_json(
        ctx.into_app(),
        "/api/booking.eventByUserAndType?user=alice&type=intro",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["workingHours"],
        json!([
            { "days": [2], "startTime": 540, "endTime": 600 },
            { "days": [1], "startTime": 840, "endTime": 960 },
        ])
    );
    assert_eq!(body["eventType"]["periodType"], json!("range"));
    assert_eq!(
        body["eventType"]["periodStartDate"],
        json!("2021-07-01T09:30:00.000Z")
    );
}

#[tokio::test]
async fn test_free_plan_second_event_type_is_null() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .returning(|_| Ok(Some(user(1, "alice", UserPlan::Free))));
    ctx.store
        .expect_find_event_type()
        .returning(|_, _| Ok(Some(event_type(11, 1, "deep-dive"))));
    ctx.store
        .expect_find_first_event_type_id()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(Some(10)));

    let (status, body) = get_json(
        ctx.into_app(),
        "/api/booking.eventByUserAndType?user=alice&type=deep-dive",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_free_plan_first_event_type_resolves() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .returning(|_| Ok(Some(user(1, "alice", UserPlan::Free))));
    ctx.store
        .expect_find_event_type()
        .returning(|_, _| Ok(Some(event_type(10, 1, "intro"))));
    ctx.store
        .expect_find_first_event_type_id()
        .times(1)
        .returning(|_| Ok(Some(10)));

    let (status, body) = get_json(
        ctx.into_app(),
        "/api/booking.eventByUserAndType?user=alice&type=intro",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eventType"]["id"], json!(10));
    assert_eq!(body["user"]["plan"], json!("FREE"));
}

#[tokio::test]
async fn test_hidden_event_type_is_null() {
    let mut ctx = TestContext::new();
    let mut intro = event_type(10, 1, "intro");
    intro.hidden = true;
    ctx.store
        .expect_find_user_by_username()
        .returning(|_| Ok(Some(user(1, "alice", UserPlan::Free))));
    ctx.store
        .expect_find_event_type()
        .returning(move |_, _| Ok(Some(intro.clone())));
    ctx.store.expect_find_first_event_type_id().times(0);

    let (status, body) = get_json(
        ctx.into_app(),
        "/api/booking.eventByUserAndType?user=alice&type=intro",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_unknown_user_is_null_without_further_lookups() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .returning(|_| Ok(None));
    ctx.store.expect_find_event_type().times(0);

    let (status, body) = get_json(
        ctx.into_app(),
        "/api/booking.eventByUserAndType?user=nobody&type=intro",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let (status, body) = get_json(
        ctx.into_app(),
        "/api/booking.eventByUserAndType?user=alice&type=intro",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_first_event_type_lookup_failure_is_internal_error() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .returning(|_| Ok(Some(user(1, "alice", UserPlan::Free))));
    ctx.store
        .expect_find_event_type()
        .returning(|_, _| Ok(Some(event_type(10, 1, "intro"))));
    ctx.store
        .expect_find_first_event_type_id()
        .with(eq(1))
        .times(1)
        .returning(|_| Err(eyre::eyre!("statement timeout")));

    let (status, body) = get_json(
        ctx.into_app(),
        "/api/booking.eventByUserAndType?user=alice&type=intro",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("statement timeout"));
}

#[tokio::test]
async fn test_event_type_lookup_failure_is_internal_error() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .returning(|_| Ok(Some(user(1, "alice", UserPlan::Pro))));
    ctx.store
        .expect_find_event_type()
        .returning(|_, _| Err(eyre::eyre!("relation \"EventType\" does not exist")));
    ctx.store.expect_find_first_event_type_id().times(0);

    let (status, body) = get_json(
        ctx.into_app(),
        "/api/booking.eventByUserAndType?user=alice&type=intro",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("EventType"));
}

#[tokio::test]
async fn test_missing_type_parameter_is_rejected() {
    let ctx = TestContext::new();

    let (status, _) = get_json(ctx.into_app(), "/api/booking.eventByUserAndType?user=alice").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_lists_visible_event_types() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .withf(|username| username == "alice")
        .returning(|_| Ok(Some(user(1, "alice", UserPlan::Pro))));
    ctx.store
        .expect_list_event_types()
        .with(eq(1), eq(None))
        .times(1)
        .returning(|_, _| {
            Ok(vec![
                summary(10, "intro", false),
                summary(11, "secret", true),
                summary(12, "deep-dive", false),
            ])
        });

    let (status, body) = get_json(ctx.into_app(), "/api/booking.userAndEventTypes?user=alice").await;

    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<_> = body["eventTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["slug"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(slugs, vec!["intro", "deep-dive"]);
    assert_eq!(body["user"]["email"], json!("alice@example.com"));
    assert!(body["user"].get("availability").is_none());
}

#[tokio::test]
async fn test_free_profile_requests_a_single_event_type() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .returning(|_| Ok(Some(user(1, "alice", UserPlan::Free))));
    ctx.store
        .expect_list_event_types()
        .with(eq(1), eq(Some(1)))
        .times(1)
        .returning(|_, _| Ok(vec![summary(10, "intro", false)]));

    let (status, body) = get_json(ctx.into_app(), "/api/booking.userAndEventTypes?user=alice").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eventTypes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_profile_of_unknown_user_is_null() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_find_user_by_username()
        .returning(|_| Ok(None));
    ctx.store.expect_list_event_types().times(0);

    let (status, body) = get_json(ctx.into_app(), "/api/booking.userAndEventTypes?user=nobody").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();

    let (status, body) = get_json(ctx.into_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
