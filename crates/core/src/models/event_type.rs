use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::availability::Availability;

/// How far into the future an event type can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[default]
    Unlimited,
    Rolling,
    Range,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Unlimited => "unlimited",
            PeriodType::Rolling => "rolling",
            PeriodType::Range => "range",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unlimited" => Ok(PeriodType::Unlimited),
            "rolling" => Ok(PeriodType::Rolling),
            "range" => Ok(PeriodType::Range),
            other => Err(eyre::eyre!("Unknown period type: {}", other)),
        }
    }
}

/// A bookable meeting template owned by a user.
///
/// `(user_id, slug)` is unique. Both are lookup keys and are left out of
/// the serialized form. Period dates only matter for [`PeriodType::Range`]
/// and are rendered as strings when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: i32,
    #[serde(default, skip_serializing)]
    pub user_id: i32,
    #[serde(default, skip_serializing)]
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    /// Meeting length in minutes
    pub length: i32,
    pub hidden: bool,
    pub availability: Vec<Availability>,
    pub time_zone: Option<String>,
    pub period_type: PeriodType,
    pub period_days: Option<i32>,
    #[serde(default, with = "period_date")]
    pub period_start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "period_date")]
    pub period_end_date: Option<DateTime<Utc>>,
    pub period_count_calendar_days: Option<bool>,
    /// Minutes of notice required before a booking
    pub minimum_booking_notice: i32,
}

/// The fields listed for each event type on a user's profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeSummary {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub length: i32,
    pub description: Option<String>,
    pub hidden: bool,
}

impl From<&EventType> for EventTypeSummary {
    fn from(event_type: &EventType) -> Self {
        Self {
            id: event_type.id,
            slug: event_type.slug.clone(),
            title: event_type.title.clone(),
            length: event_type.length,
            description: event_type.description.clone(),
            hidden: event_type.hidden,
        }
    }
}

/// Period dates travel as RFC 3339 strings or `null`.
mod period_date {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => {
                serializer.serialize_some(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|date| date.with_timezone(&Utc))
                    .map_err(D::Error::custom)
            })
            .transpose()
    }
}
