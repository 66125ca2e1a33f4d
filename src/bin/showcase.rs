extern crate showcase as lib;

use flexi_logger::{FileSpec, Logger};
use lib::calendar::MonthCursor;
use lib::events::Dispatcher;
use lib::ui::command::parse_month;
use lib::ui::{App, Theme};
use nix::sys::termios;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "showcase",
    about = "Calendar and pagination showcase for the terminal."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only print the widgets once, non-interactively"
    )]
    pub show: bool,

    #[structopt(
        short = "m",
        long = "month",
        help = "month to show first, as YYYY-MM",
        parse(try_from_str = parse_month)
    )]
    pub month: Option<MonthCursor>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;
    let cursor = args.month.unwrap_or_default();

    if args.show {
        let theme = if termion::is_tty(&io::stdout()) {
            Theme::default()
        } else {
            Theme::plain()
        };
        let app = App::new(&config, cursor, theme);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in app.draw() {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }

    const STDIN: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(termios::tcgetattr(STDIN)?);

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        if let Ok(attr) = orig_attr.lock() {
            let _ = termios::tcsetattr(STDIN, termios::SetArg::TCSANOW, &attr);
        }

        println!("Showcase ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let dispatcher = Dispatcher::from_config(&config);
    let mut app = App::new(&config, cursor, Theme::default());

    let stdout = io::stdout().into_raw_mode()?;
    let mut screen = AlternateScreen::from(stdout);
    write!(screen, "{}", termion::cursor::Hide)?;

    let result = app.run(dispatcher, &mut screen);

    write!(screen, "{}", termion::cursor::Show)?;
    screen.flush()?;

    result
}
