use chrono::{DateTime, Local};
use std::time::Instant;
use termion::{color, style};

use crate::calendar::{CalendarController, MonthCursor};
use crate::cmds::{Cmd, CmdResult};
use crate::config::{Config, ShellLayout};
use crate::pagination::{PageIntent, PaginationState};

use super::command::parse_command;
use super::toast::{NoticeKind, Toasts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Command,
}

/// Escape sequences wrapped around styled text; empty strings render plain.
#[derive(Clone, Debug)]
pub struct Theme {
    pub today_day_char: Option<char>,
    pub today_day_style: String,
    pub month_header_style: String,
    pub day_name_style: String,
    pub active_page_style: String,
    pub disabled_page_style: String,
    pub success_style: String,
    pub info_style: String,
    pub warning_style: String,
    reset: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            today_day_char: Some('*'),
            today_day_style: style::Invert.to_string(),
            month_header_style: color::Fg(color::Yellow).to_string(),
            day_name_style: style::Bold.to_string(),
            active_page_style: style::Invert.to_string(),
            disabled_page_style: style::Faint.to_string(),
            success_style: color::Fg(color::Green).to_string(),
            info_style: color::Fg(color::Blue).to_string(),
            warning_style: color::Fg(color::Yellow).to_string(),
            reset: format!("{}{}", style::Reset, color::Fg(color::Reset)),
        }
    }
}

impl Theme {
    pub fn plain() -> Self {
        Theme {
            today_day_char: Some('*'),
            today_day_style: String::new(),
            month_header_style: String::new(),
            day_name_style: String::new(),
            active_page_style: String::new(),
            disabled_page_style: String::new(),
            success_style: String::new(),
            info_style: String::new(),
            warning_style: String::new(),
            reset: String::new(),
        }
    }

    pub fn today_day_char(mut self, symbol: Option<char>) -> Self {
        self.today_day_char = symbol;
        self
    }

    pub fn paint(&self, style: &str, text: &str) -> String {
        if style.is_empty() {
            text.to_owned()
        } else {
            format!("{}{}{}", style, text, self.reset)
        }
    }

    pub fn notice_style(&self, kind: NoticeKind) -> &str {
        match kind {
            NoticeKind::Success => &self.success_style,
            NoticeKind::Info => &self.info_style,
            NoticeKind::Warning => &self.warning_style,
        }
    }
}

pub struct Context {
    pub mode: Mode,
    pub theme: Theme,
    pub command_line: String,
    layout: ShellLayout,
    calendar: CalendarController,
    pagination: Option<PaginationState>,
    toasts: Toasts,
    now: DateTime<Local>,
}

impl Context {
    pub fn new(config: &Config, cursor: MonthCursor, theme: Theme) -> Self {
        let layout = config.layout.clone();

        if !layout.calendar {
            log::warn!("Calendar not part of the layout, calendar commands are ignored");
        }
        if !layout.clock {
            log::warn!("Clock not part of the layout, skipping clock");
        }

        let pagination = if layout.pagination.is_empty() {
            None
        } else {
            Some(PaginationState::from_labels(&layout.pagination).with_first_page())
        };

        Context {
            mode: Mode::Normal,
            theme: theme.today_day_char(config.today_char),
            command_line: String::new(),
            calendar: CalendarController::new(cursor, config.week_start),
            pagination,
            toasts: Toasts::new(config.notice_lifetime),
            layout,
            now: Local::now(),
        }
    }

    pub fn layout(&self) -> &ShellLayout {
        &self.layout
    }

    pub fn calendar(&self) -> &CalendarController {
        &self.calendar
    }

    pub fn pagination(&self) -> Option<&PaginationState> {
        self.pagination.as_ref()
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn now(&self) -> &DateTime<Local> {
        &self.now
    }

    pub fn set_now(&mut self, now: DateTime<Local>) {
        self.now = now;
    }

    /// Clock tick.
    pub fn update(&mut self) {
        self.now = Local::now();
        self.toasts.expire(Instant::now());
    }

    pub fn notify(&mut self, message: String, kind: NoticeKind) {
        self.toasts.push(message, kind);
    }

    pub fn execute(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::PrevMonth | Cmd::NextMonth | Cmd::GoToMonth { .. } | Cmd::Today
                if !self.layout.calendar =>
            {
                log::warn!("Calendar not found, skipping {:?}", cmd);
                return Ok(Cmd::Noop);
            }
            Cmd::PrevMonth => {
                self.calendar.go_to_previous_month();
            }
            Cmd::NextMonth => {
                self.calendar.go_to_next_month();
            }
            Cmd::GoToMonth { year, month } => {
                self.calendar.go_to_month(year, month);
            }
            Cmd::Today => {
                let cursor = self.calendar.go_to_today(self.now.date_naive());
                self.notify(format!("Showing {}", cursor), NoticeKind::Success);
            }
            Cmd::Page(intent) => self.change_page(intent),
            Cmd::EnterCommand => {
                self.mode = Mode::Command;
                self.command_line.clear();
            }
            Cmd::Noop | Cmd::Exit => {}
        }

        Ok(cmd)
    }

    /// Parses and runs a command line.
    pub fn execute_line(&mut self, line: &str) -> CmdResult {
        let cmd = parse_command(line)?;
        self.execute(cmd)
    }

    fn change_page(&mut self, intent: PageIntent) {
        let pagination = match self.pagination.as_mut() {
            Some(pagination) => pagination,
            None => {
                self.notify("No pagination found".to_owned(), NoticeKind::Info);
                return;
            }
        };

        if pagination.navigate(intent).is_some() {
            let label = pagination
                .active_page()
                .map(|page| page.label().to_owned())
                .unwrap_or_else(|| intent.to_string());
            self.notify(format!("Navigating to page {}", label), NoticeKind::Info);
        }
    }
}
