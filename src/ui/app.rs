use std::io::Write;

use termion::event::Key;

use crate::calendar::MonthCursor;
use crate::cmds::{Cmd, CmdResult};
use crate::config::Config;
use crate::events::{Dispatcher, Event};

use super::toast::NoticeKind;
use super::{clock, Context, Mode, MonthPane, PaginationBar, Theme};

pub struct App<'a> {
    config: &'a Config,
    context: Context,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, cursor: MonthCursor, theme: Theme) -> App<'a> {
        let context = Context::new(config, cursor, theme);
        App { config, context }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Returns `false` once the app should quit.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match self.context.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Command => self.handle_command_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: Key) -> bool {
        let cmd = match self.config.key_map.get(&key) {
            Some(cmd) => *cmd,
            None => {
                log::debug!("No command bound to {:?}", key);
                return true;
            }
        };

        self.run_cmd(cmd)
    }

    fn handle_command_key(&mut self, key: Key) -> bool {
        match key {
            Key::Esc => {
                self.context.command_line.clear();
                self.context.mode = Mode::Normal;
            }
            Key::Backspace => {
                self.context.command_line.pop();
            }
            Key::Char('\n') => {
                let line = std::mem::take(&mut self.context.command_line);
                self.context.mode = Mode::Normal;

                let result = self.context.execute_line(&line);
                return self.handle_result(result);
            }
            Key::Char(c) => self.context.command_line.push(c),
            _ => {}
        }

        true
    }

    fn run_cmd(&mut self, cmd: Cmd) -> bool {
        let result = self.context.execute(cmd);
        self.handle_result(result)
    }

    fn handle_result(&mut self, result: CmdResult) -> bool {
        match result {
            Ok(Cmd::Exit) => false,
            Ok(_) => true,
            Err(err) => {
                self.context.notify(err.to_string(), NoticeKind::Warning);
                true
            }
        }
    }

    pub fn draw(&self) -> Vec<String> {
        let context = &self.context;
        let theme = &context.theme;
        let mut lines = Vec::new();

        if context.layout().clock {
            lines.push(format!(
                "{}  {}",
                clock::time_string(context.now()),
                clock::date_string(context.now())
            ));
            lines.push(String::new());
        }

        if context.layout().calendar {
            let grid = context.calendar().grid(&context.now().date_naive());
            lines.extend(MonthPane::new(&grid, theme).lines());
            lines.push(String::new());
        }

        if let Some(pagination) = context.pagination() {
            lines.push(PaginationBar::new(pagination, theme).line());
            lines.push(String::new());
        }

        for notice in context.toasts().iter() {
            lines.push(theme.paint(
                theme.notice_style(notice.kind),
                &format!("[{}] {}", notice.kind, notice.message),
            ));
        }

        if let Mode::Command = context.mode {
            lines.push(format!(":{}", context.command_line));
        }

        lines
    }

    fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}{}", termion::clear::All, termion::cursor::Goto(1, 1))?;
        for line in self.draw() {
            write!(out, "{}\r\n", line)?;
        }
        out.flush()
    }

    pub fn run<W: Write>(
        &mut self,
        dispatcher: Dispatcher,
        out: &mut W,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.present(out)?;

        while let Ok(event) = dispatcher.next() {
            match event {
                Event::Update => self.context.update(),
                Event::Input(key) => {
                    if !self.handle_key(key) {
                        break;
                    }
                }
            }

            self.present(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn app(config: &Config) -> App<'_> {
        let mut app = App::new(config, MonthCursor::new(2025, 9), Theme::plain());
        let now = Local.with_ymd_and_hms(2025, 9, 15, 12, 0, 0).unwrap();
        app.context_mut().set_now(now);
        app
    }

    fn type_line(app: &mut App, line: &str) -> bool {
        let mut running = app.handle_key(Key::Char(':'));
        for c in line.chars() {
            running &= app.handle_key(Key::Char(c));
        }
        running && app.handle_key(Key::Char('\n'))
    }

    #[test]
    fn keys_move_the_calendar() {
        let config = Config::default();
        let mut app = app(&config);

        assert!(app.handle_key(Key::Char('l')));
        assert!(app.handle_key(Key::Right));
        assert_eq!(app.context().calendar().cursor(), MonthCursor::new(2025, 11));

        app.handle_key(Key::Char('t'));
        assert_eq!(app.context().calendar().cursor(), MonthCursor::new(2025, 9));
    }

    #[test]
    fn quit_key_stops() {
        let config = Config::default();
        let mut app = app(&config);

        assert!(app.handle_key(Key::Char('x')));
        assert!(!app.handle_key(Key::Char('q')));
    }

    #[test]
    fn command_line() {
        let config = Config::default();
        let mut app = app(&config);

        assert!(type_line(&mut app, "month 2024 2"));
        assert_eq!(app.context().calendar().cursor(), MonthCursor::new(2024, 2));
        assert_eq!(app.context().mode, Mode::Normal);

        assert!(type_line(&mut app, "bogus"));
        assert_eq!(
            app.context().toasts().last().map(|n| n.kind),
            Some(NoticeKind::Warning)
        );

        assert!(!type_line(&mut app, "quit"));
    }

    #[test]
    fn escape_leaves_command_mode() {
        let config = Config::default();
        let mut app = app(&config);

        app.handle_key(Key::Char(':'));
        app.handle_key(Key::Char('m'));
        app.handle_key(Key::Esc);

        assert_eq!(app.context().mode, Mode::Normal);
        assert!(app.context().command_line.is_empty());
    }

    #[test]
    fn draw_shows_widgets() {
        let config = Config::default();
        let mut app = app(&config);

        app.handle_key(Key::Char(']'));
        let lines = app.draw();

        assert_eq!(lines[0], "12:00:00  Monday 15 September 2025");
        assert!(lines.iter().any(|l| l == "       September 2025"));
        assert!(lines.iter().any(|l| l.contains("* 15")));
        assert!(lines.iter().any(|l| l == "prev 1 [2] 3 4 5 next"));
        assert_eq!(lines.last().map(String::as_str), Some("[info] Navigating to page 2"));
    }

    #[test]
    fn draw_skips_missing_widgets() {
        let mut config = Config::default();
        config.layout.clock = false;
        config.layout.pagination.clear();
        let app = app(&config);

        let lines = app.draw();
        assert_eq!(lines[0], "       September 2025");
        assert!(!lines.iter().any(|l| l.contains("prev")));
    }
}
