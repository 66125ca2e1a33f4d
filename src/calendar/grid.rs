use chrono::Datelike;
use serde::Deserialize;
use std::fmt;
use std::slice::Chunks;

use super::MonthCursor;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart::Sunday
    }
}

impl WeekStart {
    /// Column of a weekday given as days from Sunday.
    pub fn column(self, days_from_sunday: u32) -> u32 {
        match self {
            WeekStart::Sunday => days_from_sunday % 7,
            WeekStart::Monday => (days_from_sunday + 6) % 7,
        }
    }

    pub fn day_names(self) -> impl Iterator<Item = &'static str> {
        let skip = match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        };
        DAY_NAMES.iter().copied().cycle().skip(skip).take(7)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    DayName,
    Empty,
    Day,
    Today,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    DayName(&'static str),
    Empty,
    Day { day: u32, is_today: bool },
}

impl GridCell {
    pub fn class(&self) -> CellClass {
        match self {
            GridCell::DayName(_) => CellClass::DayName,
            GridCell::Empty => CellClass::Empty,
            GridCell::Day { is_today: true, .. } => CellClass::Today,
            GridCell::Day { .. } => CellClass::Day,
        }
    }

    pub fn is_today(&self) -> bool {
        matches!(self, GridCell::Day { is_today: true, .. })
    }

    pub fn day(&self) -> Option<u32> {
        match self {
            GridCell::Day { day, .. } => Some(*day),
            _ => None,
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridCell::DayName(name) => write!(f, "{}", name),
            GridCell::Empty => Ok(()),
            GridCell::Day { day, .. } => write!(f, "{}", day),
        }
    }
}

/// One month laid out for display: seven weekday headers followed by the
/// leading blanks and one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    cursor: MonthCursor,
    week_start: WeekStart,
    leading_blanks: usize,
    cells: Vec<GridCell>,
}

impl CalendarGrid {
    const HEADER_CELLS: usize = 7;

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn title(&self) -> String {
        self.cursor.to_string()
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn headers(&self) -> &[GridCell] {
        &self.cells[..Self::HEADER_CELLS]
    }

    /// Blanks and days, without the headers.
    pub fn body(&self) -> &[GridCell] {
        &self.cells[Self::HEADER_CELLS..]
    }

    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    pub fn weeks(&self) -> Chunks<'_, GridCell> {
        self.body().chunks(7)
    }

    pub fn today(&self) -> Option<u32> {
        self.body()
            .iter()
            .find(|cell| cell.is_today())
            .and_then(GridCell::day)
    }
}

/// Sunday-first grid for `month` of `year`.
pub fn build_grid<T: Datelike>(year: i32, month: i32, today: &T) -> CalendarGrid {
    build_grid_with(year, month, today, WeekStart::Sunday)
}

pub fn build_grid_with<T: Datelike>(
    year: i32,
    month: i32,
    today: &T,
    week_start: WeekStart,
) -> CalendarGrid {
    let cursor = MonthCursor::new(year, month);
    let leading_blanks = week_start.column(cursor.first_weekday()) as usize;
    let num_days = cursor.days();
    let today_in_month = if cursor.contains(today) {
        Some(today.day())
    } else {
        None
    };

    let cells = week_start
        .day_names()
        .map(GridCell::DayName)
        .chain(std::iter::repeat(GridCell::Empty).take(leading_blanks))
        .chain((1..=num_days).map(|day| GridCell::Day {
            day,
            is_today: today_in_month == Some(day),
        }))
        .collect();

    CalendarGrid {
        cursor,
        week_start,
        leading_blanks,
        cells,
    }
}
