use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants::{settings_path, DEFAULT_SIZE},
    render::{RenderConfig, RenderStyle},
};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load/save settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse settings file ({path:?}): {err}")]
    Parse {
        path: PathBuf,
        err: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl LogLevel {
    /// Level picked by repeating `-v`, none when the flag is absent.
    pub fn from_verbosity(count: u8) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub draw_maze: Option<bool>,
    #[serde(default)]
    pub print_path: Option<bool>,
    #[serde(default)]
    pub style: Option<RenderStyle>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_width(mut self, value: i32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> i32 {
        self.width.unwrap_or(DEFAULT_SIZE)
    }

    pub fn set_height(mut self, value: i32) -> Self {
        self.height = Some(value);
        self
    }

    pub fn get_height(&self) -> i32 {
        self.height.unwrap_or(DEFAULT_SIZE)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_draw_maze(mut self, value: bool) -> Self {
        self.draw_maze = Some(value);
        self
    }

    pub fn get_draw_maze(&self) -> bool {
        self.draw_maze.unwrap_or(true)
    }

    pub fn set_print_path(mut self, value: bool) -> Self {
        self.print_path = Some(value);
        self
    }

    pub fn get_print_path(&self) -> bool {
        self.print_path.unwrap_or(true)
    }

    pub fn set_style(mut self, value: RenderStyle) -> Self {
        self.style = Some(value);
        self
    }

    pub fn get_style(&self) -> RenderStyle {
        self.style.unwrap_or_default()
    }

    pub fn set_color(mut self, value: bool) -> Self {
        self.color = Some(value);
        self
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or_default()
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            draw_maze: self.get_draw_maze(),
            print_path: self.get_print_path(),
            style: self.get_style(),
            color: self.get_color(),
        }
    }

    pub fn default_path() -> PathBuf {
        settings_path()
    }

    pub fn parse(s: &str, path: &Path) -> Result<Self, SettingsError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(s)
            .map_err(|err| SettingsError::Parse {
                path: path.to_path_buf(),
                err,
            })
    }

    /// Loads settings from `path`, a missing file is created with the defaults first.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(s) => Self::parse(&s, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("settings file {:?} not found, creating default one", path);
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS, path)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
