use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// "Jan 5, 2024, 03:04 PM" in the given zone.
#[must_use]
pub fn format_datetime_in<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Formats a stored timestamp in the user's local zone.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    format_datetime_in(&value.with_timezone(&Local))
}
