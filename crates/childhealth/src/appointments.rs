//! Vaccination appointments keyed by child ID.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::records::ChildId;

/// The only date format accepted on input and produced on output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date regex"))
}

/// A calendar date with no time component, written as `yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppointmentDate(NaiveDate);

impl AppointmentDate {
    /// Parse a `yyyy-MM-dd` string.
    ///
    /// Surrounding whitespace is ignored. The digits must form a real
    /// calendar date; `2024-02-30` is rejected rather than rolled over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if the text has the wrong shape or
    /// names a day that does not exist.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if !date_shape().is_match(trimmed) {
            return Err(Error::invalid_date(text));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| Error::invalid_date(text))
    }

    /// Build a date from its parts, if it exists.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1 to 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month, starting at 1.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for AppointmentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for AppointmentDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// In-memory appointment store. Scheduling replaces any earlier date.
#[derive(Debug, Default, Clone)]
pub struct AppointmentStore {
    appointments: HashMap<ChildId, AppointmentDate>,
}

impl AppointmentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the appointment for `child_id`, replacing any previous one.
    pub fn schedule(&mut self, child_id: ChildId, date: AppointmentDate) {
        if let Some(previous) = self.appointments.insert(child_id, date) {
            debug!(child_id, %previous, %date, "appointment rescheduled");
        } else {
            debug!(child_id, %date, "appointment scheduled");
        }
    }

    /// The current appointment for `child_id`, if any.
    #[must_use]
    pub fn get(&self, child_id: ChildId) -> Option<AppointmentDate> {
        self.appointments.get(&child_id).copied()
    }

    /// Number of children with an appointment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    /// Returns true if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> AppointmentDate {
        AppointmentDate::parse(text).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let d = date("2024-01-15");
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 15);
        assert_eq!(d.to_string(), "2024-01-15");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(date("  2024-06-01\r").to_string(), "2024-06-01");
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        for bad in [
            "15-2024-01",
            "not-a-date",
            "",
            "2024-1-15",
            "2024/01/15",
            "20240115",
            "2024-01-15T10:00",
        ] {
            let err = AppointmentDate::parse(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidDate { .. }), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(AppointmentDate::parse("2024-02-30").is_err());
        assert!(AppointmentDate::parse("2023-13-01").is_err());
        assert!(AppointmentDate::parse("2023-00-10").is_err());
        assert!(AppointmentDate::parse("2024-02-29").is_ok());
    }

    #[test]
    fn test_from_str() {
        let d: AppointmentDate = "2025-12-31".parse().unwrap();
        assert_eq!(Some(d), AppointmentDate::from_ymd(2025, 12, 31));
    }

    #[test]
    fn test_reschedule_keeps_only_latest() {
        let mut store = AppointmentStore::new();
        store.schedule(3, date("2024-01-15"));
        store.schedule(3, date("2024-06-01"));

        assert_eq!(store.get(3), Some(date("2024-06-01")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_independent_children() {
        let mut store = AppointmentStore::new();
        assert!(store.is_empty());
        store.schedule(1, date("2024-01-15"));
        store.schedule(2, date("2024-03-20"));

        assert_eq!(store.get(1), Some(date("2024-01-15")));
        assert_eq!(store.get(2), Some(date("2024-03-20")));
        assert_eq!(store.get(9), None);
    }

    #[test]
    fn test_date_serializes_as_iso_string() {
        let json = serde_json::to_string(&date("2024-01-15")).unwrap();
        assert_eq!(json, "\"2024-01-15\"");
    }
}
