// Calendar availability index: which days of a listing already carry a confirmed booking.
// The surrounding system ships the index as a JSON-encoded nested map and replaces it
// wholesale whenever the listing's bookings change.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use thiserror::Error;

// Errors raised while decoding a serialized index
#[derive(Error, Debug)]
pub enum MalformedIndexError {
    #[error("index is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object at the {level} level, found {found}")]
    UnexpectedShape { level: &'static str, found: String },

    #[error("invalid year key: {0}")]
    InvalidYear(String),

    #[error("invalid month key (expected 0-11): {0}")]
    InvalidMonth(String),

    #[error("invalid day key (expected 1-31): {0}")]
    InvalidDay(String),

    #[error("booked flag for {year}-{month}-{day} is not a boolean")]
    NonBooleanFlag { year: i32, month: u32, day: u32 },
}

// Three-level ordered mapping: year -> month (0-11) -> day (1-31) -> booked flag.
// Absence at any level means "not booked"; an explicitly false leaf means the same.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AvailabilityIndex {
    years: BTreeMap<i32, BTreeMap<u32, BTreeMap<u32, bool>>>,
}

impl AvailabilityIndex {
    // An index with no booked days
    pub fn new() -> Self {
        Self::default()
    }

    // Decode a serialized index of the shape {"2024": {"4": {"15": true}}}.
    // String keys at every level, boolean leaves, months 0-based, days 1-based.
    pub fn decode(serialized: &str) -> Result<Self, MalformedIndexError> {
        let root: Value = serde_json::from_str(serialized)?;
        let year_map = as_object(&root, "year")?;

        let mut years = BTreeMap::new();
        for (year_key, month_value) in year_map {
            let year: i32 = year_key
                .parse()
                .map_err(|_| MalformedIndexError::InvalidYear(year_key.clone()))?;
            let month_map = as_object(month_value, "month")?;

            let mut months = BTreeMap::new();
            for (month_key, day_value) in month_map {
                let month: u32 = month_key
                    .parse()
                    .ok()
                    .filter(|m| *m <= 11)
                    .ok_or_else(|| MalformedIndexError::InvalidMonth(month_key.clone()))?;
                let day_map = as_object(day_value, "day")?;

                let mut days = BTreeMap::new();
                for (day_key, flag) in day_map {
                    let day: u32 = day_key
                        .parse()
                        .ok()
                        .filter(|d| (1..=31).contains(d))
                        .ok_or_else(|| MalformedIndexError::InvalidDay(day_key.clone()))?;
                    let booked = flag.as_bool().ok_or(MalformedIndexError::NonBooleanFlag {
                        year,
                        month,
                        day,
                    })?;
                    days.insert(day, booked);
                }
                months.insert(month, days);
            }
            years.insert(year, months);
        }

        Ok(Self { years })
    }

    // Construction hook for hosts that build a snapshot natively (and for tests).
    // Once a snapshot is handed to a session it is treated as immutable.
    pub fn mark_booked(&mut self, date: NaiveDate) {
        self.years
            .entry(date.year())
            .or_default()
            .entry(date.month0())
            .or_default()
            .insert(date.day(), true);
    }

    // Total over all valid dates: true only when the full path exists and the leaf is true.
    pub fn is_booked(&self, date: NaiveDate) -> bool {
        self.years
            .get(&date.year())
            .and_then(|months| months.get(&date.month0()))
            .and_then(|days| days.get(&date.day()))
            .copied()
            .unwrap_or(false)
    }

    // Number of days carrying a confirmed booking
    pub fn booked_days(&self) -> usize {
        self.years
            .values()
            .flat_map(|months| months.values())
            .flat_map(|days| days.values())
            .filter(|booked| **booked)
            .count()
    }
}

fn as_object<'a>(
    value: &'a Value,
    level: &'static str,
) -> Result<&'a serde_json::Map<String, Value>, MalformedIndexError> {
    value
        .as_object()
        .ok_or_else(|| MalformedIndexError::UnexpectedShape {
            level,
            found: type_name(value),
        })
}

fn type_name(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}
