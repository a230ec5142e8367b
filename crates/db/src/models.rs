use booking_core::models::{
    availability::Availability,
    event_type::{EventType, EventTypeSummary, PeriodType},
    user::{User, UserPlan},
};
use chrono::{DateTime, Utc};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub start_time: i32,
    pub end_time: i32,
    pub time_zone: String,
    pub week_start: String,
    pub hide_branding: bool,
    pub theme: Option<String>,
    pub plan: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEventType {
    pub id: i32,
    pub user_id: i32,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub length: i32,
    pub hidden: bool,
    pub time_zone: Option<String>,
    pub period_type: String,
    pub period_days: Option<i32>,
    pub period_start_date: Option<DateTime<Utc>>,
    pub period_end_date: Option<DateTime<Utc>>,
    pub period_count_calendar_days: Option<bool>,
    pub minimum_booking_notice: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEventTypeSummary {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub length: i32,
    pub description: Option<String>,
    pub hidden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailability {
    pub id: i32,
    pub label: Option<String>,
    pub user_id: Option<i32>,
    pub event_type_id: Option<i32>,
    pub days: Vec<i32>,
    pub start_time: i32,
    pub end_time: i32,
}

impl DbUser {
    pub fn into_user(self, availability: Vec<DbAvailability>) -> Result<User> {
        let plan: UserPlan = self
            .plan
            .parse()
            .wrap_err_with(|| format!("Invalid plan for user {}", self.id))?;

        Ok(User {
            id: self.id,
            username: self.username,
            name: self.name,
            email: self.email,
            bio: self.bio,
            avatar: self.avatar,
            start_time: self.start_time,
            end_time: self.end_time,
            time_zone: self.time_zone,
            week_start: self.week_start,
            availability: into_windows(availability)?,
            hide_branding: self.hide_branding,
            theme: self.theme,
            plan,
        })
    }
}

impl DbEventType {
    pub fn into_event_type(self, availability: Vec<DbAvailability>) -> Result<EventType> {
        let period_type: PeriodType = self
            .period_type
            .parse()
            .wrap_err_with(|| format!("Invalid period type for event type {}", self.id))?;

        Ok(EventType {
            id: self.id,
            user_id: self.user_id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            length: self.length,
            hidden: self.hidden,
            availability: into_windows(availability)?,
            time_zone: self.time_zone,
            period_type,
            period_days: self.period_days,
            period_start_date: self.period_start_date,
            period_end_date: self.period_end_date,
            period_count_calendar_days: self.period_count_calendar_days,
            minimum_booking_notice: self.minimum_booking_notice,
        })
    }
}

impl From<DbEventTypeSummary> for EventTypeSummary {
    fn from(row: DbEventTypeSummary) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            title: row.title,
            length: row.length,
            description: row.description,
            hidden: row.hidden,
        }
    }
}

impl TryFrom<DbAvailability> for Availability {
    type Error = eyre::Report;

    fn try_from(row: DbAvailability) -> Result<Self> {
        let window = Availability {
            id: Some(row.id),
            label: row.label,
            days: row.days,
            start_time: row.start_time,
            end_time: row.end_time,
        };
        window
            .validate()
            .wrap_err_with(|| format!("Invalid availability row {}", row.id))?;
        Ok(window)
    }
}

/// Converts rows in their stored order; the resolver's stable sort relies on it.
fn into_windows(rows: Vec<DbAvailability>) -> Result<Vec<Availability>> {
    rows.into_iter().map(Availability::try_from).collect()
}
