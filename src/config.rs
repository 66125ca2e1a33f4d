use crate::calendar::WeekStart;
use crate::cmds::Cmd;
use crate::error::Result;
use crate::pagination::PageIntent;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use termion::event::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "SHOWCASE_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("showcase").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".showcase.toml"));
    }

    locations
}

/// Uses `path` if given, else the first config file found, else defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path);
    }

    match find_configfile_locations()
        .into_iter()
        .find(|location| location.is_file())
    {
        Some(location) => Config::from_file(&location),
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Which widgets the shell shows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellLayout {
    pub calendar: bool,
    pub clock: bool,
    /// Pagination control labels; empty means there is no pagination.
    pub pagination: Vec<String>,
}

impl Default for ShellLayout {
    fn default() -> Self {
        ShellLayout {
            calendar: true,
            clock: true,
            pagination: ["prev", "1", "2", "3", "4", "5", "next"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    tick_rate_ms: Option<u64>,
    notice_lifetime_secs: Option<u64>,
    week_start: Option<WeekStart>,
    today_char: Option<char>,
    layout: Option<ShellLayout>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_map: KeyMap,
    pub tick_rate: Duration,
    pub notice_lifetime: Duration,
    pub week_start: WeekStart,
    pub today_char: Option<char>,
    pub layout: ShellLayout,
}

impl Default for Config {
    fn default() -> Config {
        let mut config = Config {
            key_map: HashMap::new(),
            tick_rate: Duration::from_secs(1),
            notice_lifetime: Duration::from_secs(5),
            week_start: WeekStart::default(),
            today_char: Some('*'),
            layout: ShellLayout::default(),
        };

        config.key_map.insert(Key::Char('h'), Cmd::PrevMonth);
        config.key_map.insert(Key::Left, Cmd::PrevMonth);
        config.key_map.insert(Key::Char('l'), Cmd::NextMonth);
        config.key_map.insert(Key::Right, Cmd::NextMonth);
        config.key_map.insert(Key::Char('t'), Cmd::Today);
        config.key_map.insert(Key::Char('['), Cmd::Page(PageIntent::Prev));
        config.key_map.insert(Key::Char(']'), Cmd::Page(PageIntent::Next));
        config.key_map.insert(Key::Char(':'), Cmd::EnterCommand);
        config.key_map.insert(Key::Char('q'), Cmd::Exit);

        for (n, c) in ('1'..='9').enumerate() {
            config
                .key_map
                .insert(Key::Char(c), Cmd::Page(PageIntent::Page(n as u64 + 1)));
        }

        config
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        log::info!("Loading config from '{}'", path.display());
        let content = fs::read_to_string(path)?;
        Config::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Config::default();

        if let Some(ms) = file.tick_rate_ms {
            config.tick_rate = Duration::from_millis(ms.max(1));
        }
        if let Some(secs) = file.notice_lifetime_secs {
            config.notice_lifetime = Duration::from_secs(secs);
        }
        if let Some(week_start) = file.week_start {
            config.week_start = week_start;
        }
        if file.today_char.is_some() {
            config.today_char = file.today_char;
        }
        if let Some(layout) = file.layout {
            config.layout = layout;
        }

        Ok(config)
    }
}
