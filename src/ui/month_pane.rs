use crate::calendar::{CalendarGrid, GridCell};

use super::Theme;

pub struct MonthPane<'a> {
    grid: &'a CalendarGrid,
    theme: &'a Theme,
}

impl<'a> MonthPane<'a> {
    const CELL_WIDTH: usize = 4;
    const COLUMNS: usize = 7;

    pub fn new(grid: &'a CalendarGrid, theme: &'a Theme) -> Self {
        MonthPane { grid, theme }
    }

    fn cell(&self, cell: &GridCell) -> String {
        match cell {
            GridCell::DayName(name) => self.theme.paint(
                &self.theme.day_name_style,
                &format!("{:>width$}", name, width = Self::CELL_WIDTH),
            ),
            GridCell::Empty => " ".repeat(Self::CELL_WIDTH),
            GridCell::Day {
                day,
                is_today: true,
            } => {
                let mark = self.theme.today_day_char.unwrap_or(' ');
                self.theme.paint(
                    &self.theme.today_day_style,
                    &format!("{}{:>width$}", mark, day, width = Self::CELL_WIDTH - 1),
                )
            }
            GridCell::Day { day, .. } => format!("{:>width$}", day, width = Self::CELL_WIDTH),
        }
    }

    /// Title, weekday header and one line per week.
    pub fn lines(&self) -> Vec<String> {
        let width = Self::COLUMNS * Self::CELL_WIDTH;
        let title = format!("{:^width$}", self.grid.title(), width = width);

        let mut lines = vec![
            self.theme.paint(&self.theme.month_header_style, title.trim_end()),
            self.grid
                .headers()
                .iter()
                .map(|cell| self.cell(cell))
                .collect::<String>(),
        ];

        lines.extend(self.grid.weeks().map(|week| {
            week.iter()
                .map(|cell| self.cell(cell))
                .collect::<String>()
                .trim_end()
                .to_owned()
        }));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_grid;
    use chrono::NaiveDate;

    #[test]
    fn plain_september_2025() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        let grid = build_grid(2025, 9, &today);
        let theme = Theme::plain();

        let lines = MonthPane::new(&grid, &theme).lines();

        assert_eq!(lines[0], "       September 2025");
        assert_eq!(lines[1], " Sun Mon Tue Wed Thu Fri Sat");
        assert_eq!(lines[2], "       1   2   3   4   5   6");
        assert_eq!(lines[4], "  14* 15  16  17  18  19  20");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn today_without_symbol() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let grid = build_grid(2025, 9, &today);
        let theme = Theme::plain().today_day_char(None);

        let lines = MonthPane::new(&grid, &theme).lines();

        assert_eq!(lines[2], "       1   2   3   4   5   6");
    }
}
