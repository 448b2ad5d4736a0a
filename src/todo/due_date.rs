//! Resolution of symbolic due-date shortcuts.
//!
//! Shortcuts such as `today` or `next_week` resolve to 23:59:59 of the target day, anchored
//! to a caller-supplied "now". The [`Clock`] trait provides that anchor so the service can be
//! driven by a fixed time in tests.

use chrono::{Datelike, Duration, Local, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Source of the current local time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Symbolic due dates understood by the todo filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueShortcut {
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
}

impl DueShortcut {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::ThisWeek => "this_week",
            Self::NextWeek => "next_week",
        }
    }

    /// End of the target day relative to `now`
    pub fn resolve(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today_end = end_of_day(now);
        // Monday = 0, Sunday = 6
        let days_left = 6 - i64::from(now.weekday().num_days_from_monday());

        match self {
            Self::Today => today_end,
            Self::Tomorrow => today_end + Duration::days(1),
            Self::ThisWeek => today_end + Duration::days(days_left),
            Self::NextWeek => today_end + Duration::days(days_left + 7),
        }
    }
}

impl FromStr for DueShortcut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "this_week" => Ok(Self::ThisWeek),
            "next_week" => Ok(Self::NextWeek),
            other => Err(format!("unknown due date shortcut: {}", other)),
        }
    }
}

impl fmt::Display for DueShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn end_of_day(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

/// Formats a timestamp the way the todo API expects (`YYYY-MM-DDTHH:MM:SS`)
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Resolves a shortcut token to an ISO-8601 timestamp
///
/// Returns `None` when the token is not a known shortcut; callers then treat it as a literal
/// due date.
pub fn resolve_due_shortcut(token: &str, now: NaiveDateTime) -> Option<String> {
    token
        .parse::<DueShortcut>()
        .ok()
        .map(|shortcut| format_timestamp(shortcut.resolve(now)))
}
