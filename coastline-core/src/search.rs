use crate::{CoreError, CoreResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Raw trip parameters as read from the booking form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSearch {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

impl TripSearch {
    pub fn new(check_in: impl Into<String>, check_out: impl Into<String>, guests: u32) -> Self {
        Self {
            check_in: check_in.into(),
            check_out: check_out.into(),
            guests,
        }
    }

    /// Build from the three input values, parsing the guest count leniently.
    pub fn from_inputs(check_in: &str, check_out: &str, guests: &str) -> Self {
        Self::new(check_in, check_out, parse_guests(guests))
    }

    pub fn is_complete(&self) -> bool {
        !self.check_in.is_empty() && !self.check_out.is_empty() && self.guests > 0
    }

    pub fn stay_days(&self) -> i64 {
        date_diff_days(&self.check_in, &self.check_out)
    }
}

/// Parse a date input value. Accepts `YYYY-MM-DD` (date inputs) and
/// `YYYY-MM-DDTHH:MM[:SS]` (datetime-local inputs); a bare date is midnight.
pub fn parse_trip_date(value: &str) -> CoreResult<NaiveDateTime> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| CoreError::InvalidDate(value.to_string()))
}

/// Whole days from `check_in` to `check_out`, rounded to the nearest day.
///
/// Returns 0 when either side is empty or unparseable, or when check-out is
/// not after check-in.
pub fn date_diff_days(check_in: &str, check_out: &str) -> i64 {
    if check_in.is_empty() || check_out.is_empty() {
        return 0;
    }
    let (Ok(start), Ok(end)) = (parse_trip_date(check_in), parse_trip_date(check_out)) else {
        return 0;
    };

    let days = (end - start).num_minutes() as f64 / MINUTES_PER_DAY;
    if days > 0.0 {
        days.round() as i64
    } else {
        0
    }
}

/// Guest count from a number input.
///
/// Any finite positive number is accepted (`"2.5"`, `"1e1"`) and rounded down
/// to whole guests, never below one. Everything else counts as no guests.
pub fn parse_guests(value: &str) -> u32 {
    match value.trim().parse::<f64>() {
        Ok(count) if count.is_finite() && count > 0.0 => (count.floor() as u32).max(1),
        _ => 0,
    }
}
