use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// Minutes in a day; the latest valid end time for a window.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Weekday numbers, Sunday first.
pub const ALL_WEEKDAYS: [i32; 7] = [0, 1, 2, 3, 4, 5, 6];

/// A weekly recurring window during which bookings may occur.
///
/// Times are minutes after midnight in the owner's time zone. Windows read
/// from the store carry their row id and label; the synthesized default has
/// neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub days: Vec<i32>,
    pub start_time: i32,
    pub end_time: i32,
}

impl Availability {
    pub fn new(days: Vec<i32>, start_time: i32, end_time: i32) -> Self {
        Self {
            id: None,
            label: None,
            days,
            start_time,
            end_time,
        }
    }

    /// Builds the window used when neither the event type nor the user has
    /// configured any availability: every weekday between the user's hours.
    pub fn all_week(start_time: i32, end_time: i32) -> Self {
        Self::new(ALL_WEEKDAYS.to_vec(), start_time, end_time)
    }

    pub fn validate(&self) -> BookingResult<()> {
        if let Some(day) = self.days.iter().find(|day| !(0..=6).contains(*day)) {
            return Err(BookingError::Validation(format!(
                "Weekday {} is outside 0-6",
                day
            )));
        }

        for time in [self.start_time, self.end_time] {
            if !(0..=MINUTES_PER_DAY).contains(&time) {
                return Err(BookingError::Validation(format!(
                    "Time {} is outside 0-{} minutes",
                    time, MINUTES_PER_DAY
                )));
            }
        }

        if self.end_time < self.start_time {
            return Err(BookingError::Validation(format!(
                "Window ends ({}) before it starts ({})",
                self.end_time, self.start_time
            )));
        }

        Ok(())
    }
}
