pub mod constants;
pub mod logging;
pub mod render;
pub mod settings;

use dfmaze::{MazeError, Pos};
use thiserror::Error;

use settings::SettingsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Parses `ROW,COL` into a grid position.
pub fn parse_pos(s: &str) -> Result<Pos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|err| format!("invalid coordinate '{part}': {err}"))
    };

    Ok(Pos(parse(row)?, parse(col)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_parsing() {
        assert_eq!(parse_pos("1,1"), Ok(Pos(1, 1)));
        assert_eq!(parse_pos(" 69 , 3"), Ok(Pos(69, 3)));
        assert!(parse_pos("1").is_err());
        assert!(parse_pos("a,1").is_err());
        assert!(parse_pos("1,2,3").is_err());
    }
}
