//! Time-of-day greeting selection.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

use crate::config::GreetingCopy;

/// Coarse part of the day used to pick a greeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPeriod {
    /// Hours 5 through 11.
    Morning,
    /// Hours 12 through 17.
    Afternoon,
    /// Everything else, including the small hours before 5.
    Evening,
}

impl DayPeriod {
    /// Classify a local wall-clock hour.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..12 => Self::Morning,
            12..18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub fn message(self, copy: &GreetingCopy) -> &str {
        match self {
            Self::Morning => &copy.morning,
            Self::Afternoon => &copy.afternoon,
            Self::Evening => &copy.evening,
        }
    }
}

/// Greeting text for `hour`.
pub fn greeting_for_hour(hour: u32, copy: &GreetingCopy) -> &str {
    DayPeriod::from_hour(hour).message(copy)
}
