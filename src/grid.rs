//! Rectangular tile grid and grid coordinates.
//!
//! The grid is the single owner of cell contents: every question about what occupies a cell is
//! answered here, and the turn engine mutates cells in place as the actors move. Coordinates are
//! zero-indexed with the origin at the top-left corner.

use color_eyre::eyre::{ensure, OptionExt as _, Result};

use crate::tile::Tile;

/// A grid coordinate as a `(column, row)` pair.
///
/// The first component grows to the right and the second grows downward, matching the order in
/// which level rows are read from their text form.
pub(crate) type Position = (usize, usize);

/// Displaces a position by one signed step in each axis.
///
/// This function returns `None` when the displacement would leave the coordinate space entirely,
/// which callers treat the same as landing outside the grid. Staying within the grid's actual
/// extent is checked separately through [`Grid::in_bounds`] or [`Grid::get`].
pub(crate) fn offset(position: Position, dx: isize, dy: isize) -> Option<Position> {
    Some((
        position.0.checked_add_signed(dx)?,
        position.1.checked_add_signed(dy)?,
    ))
}

/// Rectangular field of tiles addressable by [`Position`].
///
/// This structure holds the level's cells as a vector of equally sized rows. The constructor
/// enforces the rectangular shape so that every later access only needs a plain bounds check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Row-major cell storage; every row has the same length.
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    /// Builds a grid from row-major cell storage.
    ///
    /// # Errors
    ///
    /// This function returns an error when the storage is empty or when the rows do not all share
    /// the same nonzero length.
    pub(crate) fn new(cells: Vec<Vec<Tile>>) -> Result<Self> {
        let width = cells
            .first()
            .ok_or_eyre("a grid requires at least one row")?
            .len();
        ensure!(width > 0, "a grid requires at least one column");
        for row in &cells {
            ensure!(row.len() == width, "grid rows must all share the same length");
        }

        Ok(Self { cells })
    }

    /// Returns the number of columns.
    pub(crate) fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Returns the number of rows.
    pub(crate) fn height(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether a position lies within the grid's extent.
    pub(crate) fn in_bounds(&self, position: Position) -> bool {
        position.0 < self.width() && position.1 < self.height()
    }

    /// Returns the tile at a position.
    ///
    /// # Errors
    ///
    /// This function returns an error when the position lies outside the grid. Callers on the
    /// normal gameplay path pre-validate their coordinates, so hitting the error indicates a
    /// broken caller rather than a bad level.
    pub(crate) fn get(&self, position: Position) -> Result<Tile> {
        self.cells
            .get(position.1)
            .and_then(|row| row.get(position.0))
            .copied()
            .ok_or_eyre("grid access out of bounds")
    }

    /// Replaces the tile at a position.
    ///
    /// Out-of-bounds positions are ignored; callers pre-validate their coordinates once before a
    /// sequence of writes.
    pub(crate) fn set(&mut self, position: Position, tile: Tile) {
        if let Some(cell) = self
            .cells
            .get_mut(position.1)
            .and_then(|row| row.get_mut(position.0))
        {
            *cell = tile;
        }
    }

    /// Returns the first position holding the given tile, scanning rows top to bottom.
    pub(crate) fn locate(&self, tile: Tile) -> Option<Position> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .find_map(|(col, &cell)| (cell == tile).then_some((col, row)))
        })
    }

    /// Returns the row-major cell storage for read-only traversal.
    pub(crate) fn rows(&self) -> &[Vec<Tile>] {
        &self.cells
    }
}
