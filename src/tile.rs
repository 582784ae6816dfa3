//! Tile variants and their gameplay predicates.
//!
//! Cells of the playing field are value-like variants rather than objects with behavior: a tile is
//! fully described by its tag, and movement is modeled as cell replacement in the grid. The only
//! semantics a tile carries are the two predicates the simulation consults, walkability and exit
//! membership.

/// A single cell of the playing field.
///
/// This enumeration holds the different kinds of cells that can appear in a level. Actor cells
/// ([`Tile::Player`] and [`Tile::Pursuer`]) are transient overlays written and erased by the turn
/// engine as the actors move across the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tile {
    /// An empty cell any actor may occupy.
    Floor,
    /// An impassable cell.
    Obstacle,
    /// The level's goal cell, unoccupied.
    Exit,
    /// The goal cell once the player has stepped onto it and won the game.
    ExitOccupied,
    /// The cell currently occupied by the player.
    Player,
    /// The cell currently occupied by the pursuer.
    Pursuer,
}

impl Tile {
    /// Maps a level-file symbol to its tile.
    ///
    /// The recognized symbols are `#` for obstacles, `-` for floor, `$` for the pursuer spawn, `@`
    /// for the player spawn and `.` for the exit. Any other symbol defaults to floor.
    pub(crate) const fn from_symbol(symbol: char) -> Self {
        match symbol {
            '#' => Self::Obstacle,
            '$' => Self::Pursuer,
            '@' => Self::Player,
            '.' => Self::Exit,
            _ => Self::Floor,
        }
    }

    /// Returns whether an actor may move onto this tile.
    ///
    /// Floor and the unoccupied exit are walkable, obstacles are not. The player cell reports
    /// walkable because the base tile underneath an actor is only ever queried after the actor has
    /// vacated it; the pursuer cell reports non-walkable so that the player bumping into the
    /// pursuer counts as a rejected move.
    pub(crate) const fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::Exit | Self::Player)
    }

    /// Returns whether this tile belongs to the level's exit.
    pub(crate) const fn is_exit(self) -> bool {
        matches!(self, Self::Exit | Self::ExitOccupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol_recognized_characters() {
        assert_eq!(Tile::from_symbol('#'), Tile::Obstacle);
        assert_eq!(Tile::from_symbol('-'), Tile::Floor);
        assert_eq!(Tile::from_symbol('$'), Tile::Pursuer);
        assert_eq!(Tile::from_symbol('@'), Tile::Player);
        assert_eq!(Tile::from_symbol('.'), Tile::Exit);
    }

    #[test]
    fn test_from_symbol_unknown_characters_default_to_floor() {
        assert_eq!(Tile::from_symbol(' '), Tile::Floor);
        assert_eq!(Tile::from_symbol('x'), Tile::Floor);
        assert_eq!(Tile::from_symbol('|'), Tile::Floor);
    }

    #[test]
    fn test_walkability_table() {
        assert!(Tile::Floor.is_walkable());
        assert!(Tile::Exit.is_walkable());
        assert!(Tile::Player.is_walkable());

        assert!(!Tile::Obstacle.is_walkable());
        assert!(!Tile::Pursuer.is_walkable());
        assert!(!Tile::ExitOccupied.is_walkable());
    }

    #[test]
    fn test_exit_table() {
        assert!(Tile::Exit.is_exit());
        assert!(Tile::ExitOccupied.is_exit());

        assert!(!Tile::Floor.is_exit());
        assert!(!Tile::Obstacle.is_exit());
        assert!(!Tile::Player.is_exit());
        assert!(!Tile::Pursuer.is_exit());
    }
}
