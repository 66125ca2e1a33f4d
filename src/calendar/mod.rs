//! Month arithmetic over the proleptic Gregorian calendar.
//!
//! Months are one-indexed (1 = January) everywhere in this module. Every
//! function is total: an out-of-range month is carried into the year, so
//! month 13 of 2024 is January 2025 and month 0 of 2024 is December 2023.

mod controller;
mod grid;

pub use controller::CalendarController;
pub use grid::{build_grid, build_grid_with, CalendarGrid, CellClass, GridCell, WeekStart};

use chrono::{Datelike, Local, Month, NaiveDate};
use num_traits::FromPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// Days between 0000-03-01 and 1970-01-01.
const UNIX_EPOCH_DAYS: i64 = 719_468;
const DAYS_PER_ERA: i64 = 146_097;

/// Returns `(year, month)` with `month` carried into `1..=12`.
pub fn normalize(year: i32, month: i32) -> (i32, u32) {
    from_month_count(year as i64 * 12 + (month as i64 - 1))
}

/// Splits a count of months since January of year 0. Counts beyond the
/// `i32` year range stick to December of the last year or January of the
/// first.
fn from_month_count(total: i64) -> (i32, u32) {
    let year = total.div_euclid(12);

    if year > i32::MAX as i64 {
        (i32::MAX, 12)
    } else if year < i32::MIN as i64 {
        (i32::MIN, 1)
    } else {
        (year as i32, total.rem_euclid(12) as u32 + 1)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: i32) -> u32 {
    let (year, month) = normalize(year, month);

    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Day of the week of the 1st of the month, 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month: i32) -> u32 {
    let (year, month) = normalize(year, month);
    let days = days_from_epoch(year as i64, month as i64, 1);

    // 1970-01-01 was a Thursday
    (days + 4).rem_euclid(7) as u32
}

fn days_from_epoch(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_DAYS
}

/// The month currently shown by a calendar.
///
/// There is no day-of-month: any date converted into a cursor is pinned to
/// the 1st, so stepping by months never skips a short month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: i32) -> Self {
        let (year, month) = normalize(year, month);
        MonthCursor { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        Month::from_u32(self.month)
            .unwrap_or(Month::January)
            .name()
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month as i32)
    }

    pub fn first_weekday(&self) -> u32 {
        first_weekday_of_month(self.year, self.month as i32)
    }

    pub fn contains<T: Datelike>(&self, date: &T) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        advance_month(*self, 1)
    }

    pub fn prev(&self) -> Self {
        advance_month(*self, -1)
    }
}

/// Shifts `cursor` by `delta` months, carrying into the year.
pub fn advance_month(cursor: MonthCursor, delta: i32) -> MonthCursor {
    let (year, month) = normalize(cursor.year, cursor.month as i32);
    let (year, month) = from_month_count(year as i64 * 12 + (month as i64 - 1) + delta as i64);

    MonthCursor { year, month }
}

impl Default for MonthCursor {
    fn default() -> Self {
        MonthCursor::from(Local::now().date_naive())
    }
}

impl From<NaiveDate> for MonthCursor {
    fn from(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl Add<i32> for MonthCursor {
    type Output = MonthCursor;
    fn add(self, rhs: i32) -> Self::Output {
        advance_month(self, rhs)
    }
}

impl Sub<i32> for MonthCursor {
    type Output = MonthCursor;
    fn sub(self, rhs: i32) -> Self::Output {
        advance_month(self, rhs.saturating_neg())
    }
}

impl PartialOrd for MonthCursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthCursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn out_of_range_months_carry_into_year() {
        assert_eq!(normalize(2024, 13), (2025, 1));
        assert_eq!(normalize(2024, 0), (2023, 12));
        assert_eq!(normalize(2024, -12), (2022, 12));
        assert_eq!(normalize(2024, 26), (2026, 2));
        assert_eq!(days_in_month(2023, 14), 29);
        assert_eq!(days_in_month(2024, 0), 31);
    }

    #[test]
    fn month_lengths_match_chrono() {
        for year in [1582, 1899, 1900, 1970, 1999, 2000, 2023, 2024, 2100, 2400] {
            for month in 1..=12u32 {
                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
                };
                let expected = next.signed_duration_since(first).num_days() as u32;

                assert_eq!(days_in_month(year, month as i32), expected, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn first_weekday_matches_chrono() {
        for year in [-400, -1, 0, 1, 1600, 1752, 1970, 2000, 2024, 2025, 9999] {
            for month in 1..=12u32 {
                let expected = NaiveDate::from_ymd_opt(year, month, 1)
                    .unwrap()
                    .weekday()
                    .num_days_from_sunday();

                assert_eq!(
                    first_weekday_of_month(year, month as i32),
                    expected,
                    "{}-{}",
                    year,
                    month
                );
            }
        }
    }

    #[test]
    fn known_first_weekdays() {
        // 2025-09-01 was a Monday, 2024-09-01 a Sunday
        assert_eq!(first_weekday_of_month(2025, 9), Weekday::Mon.num_days_from_sunday());
        assert_eq!(first_weekday_of_month(2024, 9), 0);
        assert_eq!(first_weekday_of_month(1970, 1), 4);
    }

    #[test]
    fn stepping_back_from_the_31st_lands_on_the_previous_month() {
        let cursor = MonthCursor::from(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        assert_eq!(advance_month(cursor, -1), MonthCursor::new(2023, 12));
    }

    #[test]
    fn stepping_forward_from_the_31st_does_not_skip_february() {
        let cursor = MonthCursor::from(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());

        assert_eq!(advance_month(cursor, 1), MonthCursor::new(2025, 2));
    }

    #[test]
    fn round_trip() {
        let jan = MonthCursor::new(2024, 1);

        assert_eq!(advance_month(advance_month(jan, 1), -1), jan);
        assert_eq!((jan + 25) - 25, jan);
        assert_eq!(jan.next().prev(), jan);
    }

    #[test]
    fn large_deltas() {
        let cursor = MonthCursor::new(2024, 5);

        assert_eq!(cursor + 12, MonthCursor::new(2025, 5));
        assert_eq!(cursor - 17, MonthCursor::new(2022, 12));
        assert_eq!(cursor + 8, MonthCursor::new(2025, 1));
    }

    #[test]
    fn stops_at_the_year_range() {
        let last = MonthCursor::new(i32::MAX, 12);
        assert_eq!(last.next(), last);
        assert_eq!(last + 30, last);
        assert_eq!(MonthCursor::new(i32::MAX, 13), last);
        assert_eq!(last.prev(), MonthCursor::new(i32::MAX, 11));

        let first = MonthCursor::new(i32::MIN, 1);
        assert_eq!(first.prev(), first);
        assert_eq!(first - 30, first);
        assert_eq!(MonthCursor::new(i32::MIN, 0), first);
        assert_eq!(first.next(), MonthCursor::new(i32::MIN, 2));
    }

    #[test]
    fn ordering_and_display() {
        assert!(MonthCursor::new(2023, 12) < MonthCursor::new(2024, 1));
        assert!(MonthCursor::new(2024, 2) > MonthCursor::new(2024, 1));
        assert_eq!(MonthCursor::new(2025, 9).to_string(), "September 2025");
    }

    #[test]
    fn contains_ignores_day() {
        let cursor = MonthCursor::new(2025, 9);

        assert!(cursor.contains(&NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()));
        assert!(!cursor.contains(&NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()));
    }
}
