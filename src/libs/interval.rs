//! Time interval calculator for worked time entries.
//!
//! Converts a pair of wall-clock times into a number of worked minutes and
//! combines a duration with an hourly rate into a monetary amount.
//!
//! ## Features
//!
//! - **Overnight Shifts**: an end time earlier than the start time is read as
//!   crossing midnight, so `22:00 → 02:00` is four hours
//! - **Whole Minutes**: inputs are whole-minute clock times, results are exact
//! - **Full Precision Totals**: amounts are never rounded here; rounding
//!   happens once, in [`crate::libs::formatter`]
//!
//! ## Usage
//!
//! ```rust
//! use hourly::libs::interval::{compute_duration, compute_total, ClockTime};
//!
//! let start: ClockTime = "09:00".parse()?;
//! let end: ClockTime = "17:30".parse()?;
//! let minutes = compute_duration(start, end);
//! assert_eq!(minutes, 510);
//! assert_eq!(compute_total(minutes, 20.0), 170.0);
//! # Ok::<(), hourly::libs::error::HourlyError>(())
//! ```

use crate::libs::error::{HourlyError, HourlyResult};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minutes in a calendar day, added when a shift crosses midnight.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A validated wall-clock time with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Builds a clock time, rejecting hours outside 0-23 and minutes outside 0-59.
    pub fn new(hour: u32, minute: u32) -> HourlyResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(HourlyError::InvalidClockTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Minutes elapsed since 00:00.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl FromStr for ClockTime {
    type Err = HourlyError;

    /// Parses `HH:MM`, also accepting a trailing `:SS` as stored by SQL time
    /// columns. Seconds must be valid but are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HourlyError::InvalidClockTime(s.to_string());
        let mut parts = s.trim().split(':');

        let hour = parts.next().ok_or_else(invalid)?;
        let minute = parts.next().ok_or_else(invalid)?;
        let seconds = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        let parse = |part: &str, max: u32| -> HourlyResult<u32> {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let value: u32 = part.parse().map_err(|_| invalid())?;
            if value > max {
                return Err(invalid());
            }
            Ok(value)
        };

        let hour = parse(hour, 23)?;
        let minute = parse(minute, 59)?;
        if let Some(seconds) = seconds {
            parse(seconds, 59)?;
        }

        ClockTime::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl ToSql for ClockTime {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for ClockTime {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Number of minutes worked between two clock times.
///
/// A negative difference means the shift crossed midnight and one day is
/// added. Equal times produce `0`, which is a valid placeholder entry.
pub fn compute_duration(start: ClockTime, end: ClockTime) -> u32 {
    let mut delta = end.minutes_since_midnight() as i32 - start.minutes_since_midnight() as i32;
    if delta < 0 {
        delta += MINUTES_PER_DAY;
    }
    delta as u32
}

/// Parses both clock times and computes the minutes between them.
pub fn duration_between(start: &str, end: &str) -> HourlyResult<u32> {
    let start: ClockTime = start.parse()?;
    let end: ClockTime = end.parse()?;
    Ok(compute_duration(start, end))
}

/// Money earned for `duration_minutes` at `hourly_rate`, at full precision.
pub fn compute_total(duration_minutes: u32, hourly_rate: f64) -> f64 {
    (duration_minutes as f64 / 60.0) * hourly_rate
}
