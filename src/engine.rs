//! Turn resolution for the chase.
//!
//! The engine owns the level's grid together with the two actor positions and resolves one
//! discrete turn per player input: a successful move relocates the player, a rejected move hands
//! the initiative to the pursuer. Resolution is synchronous end to end, so between calls the
//! engine is always at rest in one of the externally visible states.

use color_eyre::eyre::{OptionExt as _, Result};

use crate::{
    grid::{self, Grid, Position},
    level::Level,
    pathfinding,
    tile::Tile,
};

/// Number of pursuer steps granted by one rejected player move.
pub(crate) const PURSUIT_STEPS: usize = 5;

/// Externally visible engine states.
///
/// The engine starts in [`GameState::AwaitingInput`] and every other state is terminal. A timeout
/// counts as a loss for scoring, but it is kept distinct so that the interface can word the result
/// differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GameState {
    /// The engine is at rest between turns and accepts directional input.
    AwaitingInput,
    /// The player reached the exit.
    Won,
    /// The pursuer caught the player.
    Lost,
    /// The countdown owner declared the session expired.
    TimedOut,
}

impl GameState {
    /// Returns whether the state ends the session.
    pub(crate) const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingInput)
    }
}

/// Simulation core for one level session.
///
/// This structure holds the mutable grid, the cached actor positions and the current state. The
/// cached positions are refreshed on every move so that they never disagree with the grid's cell
/// contents in any published state.
#[derive(Debug)]
pub(crate) struct Engine {
    /// The level's cells, mutated in place as the actors move.
    grid: Grid,
    /// Current player position, mirroring the grid's player cell.
    player: Position,
    /// Current pursuer position, mirroring the grid's pursuer cell.
    pursuer: Position,
    /// Current resolution state.
    state: GameState,
    /// Set when the last pursuit found no route to the player, which marks the level as broken.
    unreachable: bool,
}

impl Engine {
    /// Builds an engine from a level by parsing its rows and locating the two actor spawns.
    ///
    /// # Errors
    ///
    /// This function returns an error when the rows do not form a rectangular grid or when either
    /// actor spawn is missing. The level validator rejects such files before they reach the menu,
    /// so these errors indicate a level that bypassed validation.
    pub(crate) fn new(level: &Level) -> Result<Self> {
        let mut cells = Vec::new();
        for line in &level.rows {
            let mut row = Vec::new();
            for symbol in line.chars() {
                row.push(Tile::from_symbol(symbol));
            }
            cells.push(row);
        }
        let grid = Grid::new(cells)?;

        let player = grid
            .locate(Tile::Player)
            .ok_or_eyre("failed to locate the player spawn in the level")?;
        let pursuer = grid
            .locate(Tile::Pursuer)
            .ok_or_eyre("failed to locate the pursuer spawn in the level")?;

        Ok(Self {
            grid,
            player,
            pursuer,
            state: GameState::AwaitingInput,
            unreachable: false,
        })
    }

    /// Resolves one turn triggered by a directional input.
    ///
    /// A candidate cell outside the grid leaves the engine untouched. A walkable candidate moves
    /// the player there, winning the session when the candidate is the exit. A non-walkable
    /// candidate rejects the move, and the rejection is what lets the pursuer advance by
    /// [`PURSUIT_STEPS`] steps. Terminal states make the call a no-op.
    ///
    /// # Errors
    ///
    /// This function returns an error when the pre-validated candidate cell cannot be read back
    /// from the grid, which cannot happen through the public entry points.
    pub(crate) fn attempt_player_move(&mut self, dx: isize, dy: isize) -> Result<()> {
        if self.state.is_terminal() {
            return Ok(());
        }

        let Some(candidate) = grid::offset(self.player, dx, dy) else {
            return Ok(());
        };
        if !self.grid.in_bounds(candidate) {
            return Ok(());
        }

        let target = self.grid.get(candidate)?;
        if target.is_walkable() {
            self.grid.set(self.player, Tile::Floor);

            if target.is_exit() {
                self.grid.set(candidate, Tile::ExitOccupied);
                self.player = candidate;
                self.state = GameState::Won;
            } else {
                self.player = candidate;
                self.grid.set(candidate, Tile::Player);
            }
        } else {
            self.advance_pursuer(PURSUIT_STEPS);
        }

        Ok(())
    }

    /// Walks the pursuer up to `max_steps` cells along the shortest route to the player.
    ///
    /// An empty route means the pursuer cannot reach the player at all; that is a defect of the
    /// level rather than a gameplay outcome, so the turn resolves without movement and the
    /// condition is flagged for the interface. A step landing on the player's cell captures the
    /// player and ends the session immediately, abandoning any remaining steps.
    pub(crate) fn advance_pursuer(&mut self, max_steps: usize) {
        if self.state.is_terminal() {
            return;
        }

        let path = pathfinding::find_path(&self.grid, self.pursuer, self.player);
        if path.is_empty() {
            self.unreachable = true;
            return;
        }
        self.unreachable = false;

        for step in path.into_iter().take(max_steps) {
            self.grid.set(self.pursuer, Tile::Floor);
            self.pursuer = step;
            self.grid.set(step, Tile::Pursuer);

            if step == self.player {
                self.state = GameState::Lost;
                break;
            }
        }
    }

    /// Ends the session on behalf of the countdown owner.
    ///
    /// The engine never reads the clock itself; the caller decides when time is up. A session
    /// already in a terminal state stays in it.
    pub(crate) fn timeout(&mut self) {
        if !self.state.is_terminal() {
            self.state = GameState::TimedOut;
        }
    }

    /// Returns the current resolution state.
    pub(crate) const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the grid for rendering snapshots.
    pub(crate) const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player's current position.
    pub(crate) const fn player_position(&self) -> Position {
        self.player
    }

    /// Returns the pursuer's current position.
    pub(crate) const fn pursuer_position(&self) -> Position {
        self.pursuer
    }

    /// Returns whether the last pursuit found the player unreachable.
    pub(crate) const fn pursuer_unreachable(&self) -> bool {
        self.unreachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a level directly from textual rows.
    fn level_from_rows(rows: &[&str]) -> Level {
        Level {
            name: "test".to_owned(),
            rows: rows.iter().map(|row| (*row).to_owned()).collect(),
        }
    }

    /// Builds an engine from textual rows.
    fn engine_from_rows(rows: &[&str]) -> Engine {
        Engine::new(&level_from_rows(rows)).expect("failed to build test engine")
    }

    /// Asserts that the cached actor positions agree with the grid's cell contents.
    fn assert_actors_consistent(engine: &Engine) {
        if engine.state() == GameState::AwaitingInput {
            assert_eq!(
                engine
                    .grid()
                    .get(engine.player_position())
                    .expect("player position should be in bounds"),
                Tile::Player,
                "player position should mirror the grid"
            );
        }
        assert_eq!(
            engine
                .grid()
                .get(engine.pursuer_position())
                .expect("pursuer position should be in bounds"),
            Tile::Pursuer,
            "pursuer position should mirror the grid"
        );
    }

    #[test]
    fn test_new_locates_both_spawns() {
        let engine = engine_from_rows(&["#.-", "-@-", "-$-"]);

        assert_eq!(engine.player_position(), (1, 1));
        assert_eq!(engine.pursuer_position(), (1, 2));
        assert_eq!(engine.state(), GameState::AwaitingInput);
        assert_actors_consistent(&engine);
    }

    #[test]
    fn test_new_rejects_missing_spawns() {
        assert!(Engine::new(&level_from_rows(&["#.-", "---", "-$-"])).is_err());
        assert!(Engine::new(&level_from_rows(&["#.-", "-@-", "---"])).is_err());
    }

    #[test]
    fn test_move_onto_floor_relocates_player() {
        let mut engine = engine_from_rows(&["#.-", "-@-", "-$-"]);

        engine
            .attempt_player_move(-1, 0)
            .expect("move should resolve");

        assert_eq!(engine.player_position(), (0, 1));
        assert_eq!(
            engine.grid().get((1, 1)).expect("cell should exist"),
            Tile::Floor,
            "vacated cell should revert to floor"
        );
        assert_eq!(engine.state(), GameState::AwaitingInput);
        assert_actors_consistent(&engine);
    }

    #[test]
    fn test_move_out_of_bounds_is_a_no_op() {
        let mut engine = engine_from_rows(&["@-", "-$"]);

        engine
            .attempt_player_move(-1, 0)
            .expect("move should resolve");
        engine
            .attempt_player_move(0, -1)
            .expect("move should resolve");

        assert_eq!(engine.player_position(), (0, 0));
        assert_eq!(engine.state(), GameState::AwaitingInput);
        assert_actors_consistent(&engine);
    }

    #[test]
    fn test_move_onto_exit_wins() {
        let mut engine = engine_from_rows(&["#.-", "-@-", "-$-"]);

        engine
            .attempt_player_move(0, -1)
            .expect("move should resolve");

        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(
            engine.grid().get((1, 0)).expect("cell should exist"),
            Tile::ExitOccupied
        );
        assert_eq!(
            engine.grid().get((1, 1)).expect("cell should exist"),
            Tile::Floor
        );
    }

    #[test]
    fn test_terminal_state_ignores_further_input() {
        let mut engine = engine_from_rows(&["#.-", "-@-", "-$-"]);

        engine
            .attempt_player_move(0, -1)
            .expect("move should resolve");
        let pursuer_before = engine.pursuer_position();

        engine
            .attempt_player_move(0, 1)
            .expect("move should resolve");
        engine.advance_pursuer(PURSUIT_STEPS);
        engine.timeout();

        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.pursuer_position(), pursuer_before);
    }

    #[test]
    fn test_blocked_move_advances_pursuer_instead() {
        // The obstacle to the player's left rejects the move; the pursuer is far enough away to
        // spend its full step budget without a capture.
        let mut engine = engine_from_rows(&["#@---------$"]);

        engine
            .attempt_player_move(-1, 0)
            .expect("move should resolve");

        assert_eq!(engine.player_position(), (1, 0), "rejected move must not relocate the player");
        assert_eq!(engine.pursuer_position(), (6, 0));
        assert_eq!(engine.state(), GameState::AwaitingInput);
        assert_actors_consistent(&engine);
    }

    #[test]
    fn test_blocked_move_into_pursuer_gets_the_player_caught() {
        let mut engine = engine_from_rows(&["#.-", "-@-", "-$-"]);

        engine
            .attempt_player_move(0, 1)
            .expect("move should resolve");

        assert_eq!(engine.player_position(), (1, 1));
        assert_eq!(engine.pursuer_position(), (1, 1));
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(
            engine.grid().get((1, 1)).expect("cell should exist"),
            Tile::Pursuer
        );
    }

    #[test]
    fn test_capture_stops_mid_path() {
        let mut engine = engine_from_rows(&["#.-", "-@-", "-$-"]);

        engine
            .attempt_player_move(-1, 0)
            .expect("move should resolve");
        engine.advance_pursuer(PURSUIT_STEPS);

        // The route from (1, 2) to (0, 1) is two steps long, well under the budget; the second
        // step lands on the player and ends the session there.
        assert_eq!(engine.state(), GameState::Lost);
        assert_eq!(engine.pursuer_position(), (0, 1));
    }

    #[test]
    fn test_unreachable_player_is_flagged_without_movement() {
        let mut engine = engine_from_rows(&["@#$"]);

        engine
            .attempt_player_move(1, 0)
            .expect("move should resolve");

        assert!(engine.pursuer_unreachable());
        assert_eq!(engine.pursuer_position(), (2, 0));
        assert_eq!(engine.state(), GameState::AwaitingInput);
    }

    #[test]
    fn test_timeout_is_terminal_and_distinct_from_loss() {
        let mut engine = engine_from_rows(&["#.-", "-@-", "-$-"]);

        engine.timeout();

        assert_eq!(engine.state(), GameState::TimedOut);
        assert!(engine.state().is_terminal());

        engine
            .attempt_player_move(0, -1)
            .expect("move should resolve");
        assert_eq!(engine.state(), GameState::TimedOut);
    }

    #[test]
    fn test_actor_positions_track_grid_across_a_session() {
        let mut engine = engine_from_rows(&["@---", "-##-", "---$"]);

        for (dx, dy) in [(1_isize, 0_isize), (1, 0), (1, 0), (0, 1)] {
            engine
                .attempt_player_move(dx, dy)
                .expect("move should resolve");
            assert_actors_consistent(&engine);
        }
    }
}
