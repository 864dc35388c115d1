use std::path::PathBuf;

use dirs::preference_dir;

pub const DEFAULT_SIZE: i32 = 71;

pub const MAZE_DISABLED_NOTICE: &str = "Maze drawing is disabled by feature flag.";
pub const PATH_DISABLED_NOTICE: &str = "Path printing is disabled by feature flag.";

pub fn base_path() -> PathBuf {
    preference_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dfmaze")
}

pub fn settings_path() -> PathBuf {
    base_path().join("settings.ron")
}
