use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// 24-hour `HH:MM:SS`.
pub fn time_string<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%H:%M:%S").to_string()
}

/// Long form, e.g. "Monday 15 September 2025".
pub fn date_string<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%A %-d %B %Y").to_string()
}
