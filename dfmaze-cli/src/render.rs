use crossterm::style::Stylize as _;
use dfmaze::{Grid, Pos};
use serde::{Deserialize, Serialize};

use crate::constants::{MAZE_DISABLED_NOTICE, PATH_DISABLED_NOTICE};

/// Display value of path cells, next to `0` (open) and `1` (wall).
pub const PATH_VALUE: u8 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum RenderStyle {
    /// `0`, `1` and `2` separated by spaces
    Digits,
    /// Block characters, two columns per cell
    #[default]
    Blocks,
}

/// Switches for the renderer, the core never looks at these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub draw_maze: bool,
    pub print_path: bool,
    pub style: RenderStyle,
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            draw_maze: true,
            print_path: true,
            style: RenderStyle::default(),
            color: false,
        }
    }
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Lists the grid as digits with the path marked by [`PATH_VALUE`].
    pub fn print_path(&self, grid: &Grid, path: &[Pos]) -> String {
        if !self.config.print_path {
            return format!("{PATH_DISABLED_NOTICE}\n");
        }

        digits(&overlay(grid, Some(path)))
    }

    /// Draws the grid in the configured style, with the path if there is one.
    pub fn draw(&self, grid: &Grid, path: Option<&[Pos]>) -> String {
        if !self.config.draw_maze {
            return format!("{MAZE_DISABLED_NOTICE}\n");
        }

        let values = overlay(grid, path);
        match self.config.style {
            RenderStyle::Digits => digits(&values),
            RenderStyle::Blocks => self.blocks(&values),
        }
    }

    fn blocks(&self, values: &[Vec<u8>]) -> String {
        let mut out = String::new();
        for row in values {
            for &value in row {
                let cell = match value {
                    0 => "  ".to_string(),
                    1 if self.config.color => "██".dark_grey().to_string(),
                    1 => "██".to_string(),
                    _ if self.config.color => "<>".green().to_string(),
                    _ => "<>".to_string(),
                };
                out.push_str(&cell);
            }
            out.push('\n');
        }
        out
    }
}

/// Copy of the grid values with the path cells replaced, the grid itself stays untouched.
fn overlay(grid: &Grid, path: Option<&[Pos]>) -> Vec<Vec<u8>> {
    let mut values = grid.to_values();
    for &Pos(row, col) in path.unwrap_or_default() {
        if let Some(value) = values
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *value = PATH_VALUE;
        }
    }
    values
}

fn digits(values: &[Vec<u8>]) -> String {
    let mut out = String::new();
    for row in values {
        let line: Vec<_> = row.iter().map(u8::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows([[0, 1, 0], [0, 1, 0], [0, 0, 0]]).unwrap()
    }

    fn path() -> Vec<Pos> {
        vec![Pos(0, 0), Pos(1, 0), Pos(2, 0), Pos(2, 1), Pos(2, 2)]
    }

    #[test]
    fn path_listing() {
        let renderer = Renderer::new(RenderConfig::default());
        assert_eq!(
            renderer.print_path(&grid(), &path()),
            "2 1 0\n2 1 0\n2 2 2\n"
        );
    }

    #[test]
    fn blocks() {
        let renderer = Renderer::new(RenderConfig::default());
        assert_eq!(
            renderer.draw(&grid(), None),
            "  ██  \n  ██  \n      \n"
        );
        assert_eq!(
            renderer.draw(&grid(), Some(&path())),
            "<>██  \n<>██  \n<><><>\n"
        );
    }

    #[test]
    fn digits_style() {
        let renderer = Renderer::new(RenderConfig {
            style: RenderStyle::Digits,
            ..Default::default()
        });
        assert_eq!(renderer.draw(&grid(), None), "0 1 0\n0 1 0\n0 0 0\n");
    }

    #[test]
    fn toggles() {
        let renderer = Renderer::new(RenderConfig {
            draw_maze: false,
            print_path: false,
            ..Default::default()
        });
        assert_eq!(
            renderer.print_path(&grid(), &path()),
            format!("{PATH_DISABLED_NOTICE}\n")
        );
        assert_eq!(
            renderer.draw(&grid(), Some(&path())),
            format!("{MAZE_DISABLED_NOTICE}\n")
        );
    }

    #[test]
    fn grid_is_not_mutated() {
        let grid = grid();
        let before = grid.clone();
        let renderer = Renderer::new(RenderConfig::default());
        renderer.print_path(&grid, &path());
        renderer.draw(&grid, Some(&path()));
        assert_eq!(grid, before);
    }
}
