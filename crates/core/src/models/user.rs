use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::availability::Availability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserPlan {
    Free,
    Trial,
    Pro,
}

impl UserPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserPlan::Free => "FREE",
            UserPlan::Trial => "TRIAL",
            UserPlan::Pro => "PRO",
        }
    }
}

impl fmt::Display for UserPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserPlan {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FREE" => Ok(UserPlan::Free),
            "TRIAL" => Ok(UserPlan::Trial),
            "PRO" => Ok(UserPlan::Pro),
            other => Err(eyre::eyre!("Unknown user plan: {}", other)),
        }
    }
}

/// A user as seen by a public booking page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    /// Default working day start, minutes after midnight
    pub start_time: i32,
    /// Default working day end, minutes after midnight
    pub end_time: i32,
    pub time_zone: String,
    pub week_start: String,
    /// User-level windows, used when an event type has none of its own
    pub availability: Vec<Availability>,
    pub hide_branding: bool,
    pub theme: Option<String>,
    pub plan: UserPlan,
}

/// The profile fields shown above a user's list of event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub theme: Option<String>,
    pub plan: UserPlan,
}

impl From<User> for PublicProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
            bio: user.bio,
            avatar: user.avatar,
            theme: user.theme,
            plan: user.plan,
        }
    }
}
