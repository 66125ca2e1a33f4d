use chrono::{Datelike, NaiveDate};

use super::grid::{build_grid_with, CalendarGrid, WeekStart};
use super::{advance_month, MonthCursor};

/// Owns the displayed month. All cursor movement goes through here.
#[derive(Debug, Clone, Default)]
pub struct CalendarController {
    cursor: MonthCursor,
    week_start: WeekStart,
}

impl CalendarController {
    pub fn new(cursor: MonthCursor, week_start: WeekStart) -> Self {
        CalendarController { cursor, week_start }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn go_to_previous_month(&mut self) -> MonthCursor {
        self.shift(-1)
    }

    pub fn go_to_next_month(&mut self) -> MonthCursor {
        self.shift(1)
    }

    pub fn go_to_month(&mut self, year: i32, month: i32) -> MonthCursor {
        self.cursor = MonthCursor::new(year, month);
        log::debug!("calendar moved to {}", self.cursor);
        self.cursor
    }

    pub fn go_to_today(&mut self, today: NaiveDate) -> MonthCursor {
        self.go_to_month(today.year(), today.month() as i32)
    }

    pub fn grid<T: Datelike>(&self, today: &T) -> CalendarGrid {
        build_grid_with(
            self.cursor.year(),
            self.cursor.month() as i32,
            today,
            self.week_start,
        )
    }

    fn shift(&mut self, delta: i32) -> MonthCursor {
        self.cursor = advance_month(self.cursor, delta);
        log::debug!("calendar moved to {}", self.cursor);
        self.cursor
    }
}
