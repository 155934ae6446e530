//! Fixed display formats for dates and instants.
//!
//! The tool serves a single es-AR audience; display formats are fixed
//! rather than negotiated. The model stores plain instants and calendar
//! dates — formatting happens only at projection time.

use chrono::{DateTime, NaiveDate, Utc};

/// Calendar dates render as `dd/mm/yyyy`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Instants render as `dd/mm/yyyy HH:MM:SS`.
pub const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Format a calendar date for display.
pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

/// Format an instant for display.
pub fn format_instant(at: DateTime<Utc>) -> String {
  at.format(DATETIME_FORMAT).to_string()
}
