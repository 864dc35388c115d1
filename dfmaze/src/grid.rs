use crate::{
    array::Array2D,
    dims::{Dims, Pos},
    error::MazeError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    Wall,
}

impl Tile {
    /// Value used by renderers, `0` for open and `1` for wall.
    pub const fn value(self) -> u8 {
        match self {
            Tile::Open => 0,
            Tile::Wall => 1,
        }
    }

    pub const fn from_value(value: u8) -> Option<Tile> {
        match value {
            0 => Some(Tile::Open),
            1 => Some(Tile::Wall),
            _ => None,
        }
    }

    pub fn is_open(self) -> bool {
        self == Tile::Open
    }
}

/// Rectangular maze grid, addressed by `Pos(row, col)`.
///
/// Chambers are the cells at odd row and odd column, every chamber is one logical cell of the
/// maze. Cells with exactly one odd coordinate are connectors, an open connector joins the two
/// chambers next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2D<Tile>,
}

impl Grid {
    /// Builds the uncarved skeleton of a maze, every chamber open and everything else wall.
    ///
    /// Both dimensions have to be odd and at least 3.
    pub fn build(width: i32, height: i32) -> Result<Grid, MazeError> {
        if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let mut tiles = Array2D::new(Tile::Wall, width as usize, height as usize);
        for pos in Dims::iter_fill(Dims::ZERO, Dims((width - 1) / 2, (height - 1) / 2)) {
            tiles[Self::chamber_pos(pos)] = Tile::Open;
        }

        Ok(Grid { tiles })
    }

    /// Builds a grid from rows of `0` (open) and `1` (wall) values.
    ///
    /// Any rectangular shape is accepted, this is meant for searching hand made grids.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Grid, MazeError>
    where
        R: IntoIterator<Item = u8>,
    {
        let values = Array2D::from_rows(rows).map_err(|(row, expected, found)| {
            MazeError::RaggedRows {
                row,
                expected,
                found,
            }
        })?;

        if let Some(pos) = values
            .iter_pos()
            .find(|&pos| Tile::from_value(values[pos]).is_none())
        {
            return Err(MazeError::InvalidTile {
                pos,
                value: values[pos],
            });
        }

        Ok(Grid {
            tiles: values.map(|&v| Tile::from_value(v).unwrap_or(Tile::Wall)),
        })
    }

    pub fn width(&self) -> i32 {
        self.tiles.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.tiles.height() as i32
    }

    /// Number of logical cells along each axis, `Dims(logical_width, logical_height)`.
    pub fn logical_size(&self) -> Dims {
        Dims((self.width() - 1) / 2, (self.height() - 1) / 2)
    }

    pub fn chamber_pos(cell: Dims) -> Pos {
        Pos(cell.1, cell.0) * 2 + 1
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.tiles.get(pos).copied()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.tiles.contains(pos)
    }

    /// Returns `false` for positions outside of the grid.
    pub fn is_open(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(Tile::is_open)
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        pos.0 == 0 || pos.1 == 0 || pos.0 == self.height() - 1 || pos.1 == self.width() - 1
    }

    pub fn is_chamber(&self, pos: Pos) -> bool {
        self.contains(pos) && pos.0 % 2 == 1 && pos.1 % 2 == 1
    }

    pub fn is_connector(&self, pos: Pos) -> bool {
        self.contains(pos) && !self.is_border(pos) && (pos.0 % 2 == 1) != (pos.1 % 2 == 1)
    }

    pub fn open_connectors(&self) -> usize {
        self.tiles
            .iter_pos()
            .filter(|&pos| self.is_connector(pos) && self.is_open(pos))
            .count()
    }

    pub fn chambers(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.logical_size();
        Dims::iter_fill(Dims::ZERO, size).map(Self::chamber_pos)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.rows()
    }

    /// Copy of the grid as rows of `0`/`1` values.
    pub fn to_values(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|t| t.value()).collect())
            .collect()
    }

    /// The first and the last chamber, top left and bottom right.
    pub fn default_endpoints(&self) -> (Pos, Pos) {
        (Pos(1, 1), Pos(self.height() - 2, self.width() - 2))
    }

    pub(crate) fn set(&mut self, pos: Pos, tile: Tile) {
        self.tiles[pos] = tile;
    }
}
