//! Core application state and logic for the chase game.

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    engine::Engine,
    events,
    level::Level,
    types::{MainMenuItem, Screen},
    ui,
};

/// Wall-clock budget granted for one level.
///
/// The countdown belongs to the application, never to the engine; when it runs out the
/// application asks the engine to finalize the session as timed out.
pub(crate) const LEVEL_TIME_LIMIT: Duration = Duration::from_secs(20);

/// Application state container for the chase game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Currently active level.
    ///
    /// This field holds the level the next session will play. The custom type always holds a
    /// level, either the built-in default or one loaded and selected by the user.
    pub(crate) level: Level,
    /// Collection of all available levels.
    ///
    /// This field holds information about all the levels discovered in the levels directory,
    /// stored as custom types within an ordered collection.
    pub(crate) levels: Vec<Level>,
    /// Level currently under the cursor in the level menu viewport.
    pub(crate) viewport_level: Option<Level>,
    /// Scrolling offset for the level list viewport.
    ///
    /// This field holds the offset by which to scroll the sliding window into the
    /// [`levels`](App::levels) vector in the level menu's viewport.
    pub(crate) viewport_offset: usize,
    /// Height of the level list rendering area.
    ///
    /// This field holds the height of the area in which the list of levels was rendered during
    /// the last redraw of the on-screen frame, as a measure of terminal cells.
    pub(crate) viewport_height: usize,
    /// Directory scanned for level files.
    pub(crate) levels_dir: PathBuf,
    /// Running game session, present while the in-game screen is active.
    pub(crate) session: Option<Session>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

impl App {
    /// Creates a new instance of the App structure with safe defaults.
    ///
    /// The levels directory is where the level menu looks for `.maze` files; everything else
    /// starts out empty with the built-in level selected.
    pub fn new(levels_dir: PathBuf) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::StartGame),
            level: Level::default(),
            levels: Vec::new(),
            viewport_level: None,
            viewport_offset: 0,
            viewport_height: 0,
            levels_dir,
            session: None,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues
    /// until the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Creates a fresh session for the currently selected level.
    ///
    /// # Errors
    ///
    /// This function returns an error when the selected level cannot be turned into a playable
    /// engine, which only happens for levels that bypassed validation.
    pub(crate) fn start_session(&mut self) -> Result<()> {
        self.session = Some(Session::new(&self.level)?);

        Ok(())
    }

    /// Discards the running session, if any.
    pub(crate) fn abort_session(&mut self) {
        self.session = None;
    }

    /// Finalizes the session as timed out once its countdown has run dry.
    ///
    /// The engine itself never reads the clock, so this tick is the only place where elapsed time
    /// turns into a state transition.
    pub(crate) fn tick_session(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.countdown.started() && session.countdown.expired() {
                session.engine.timeout();
            }
        }
    }
}

/// One playthrough of a level: the simulation engine plus its countdown.
pub(crate) struct Session {
    /// Simulation core resolving the turns of this playthrough.
    pub engine: Engine,
    /// Wall-clock countdown; armed by the start trigger, read by the renderer.
    pub countdown: Countdown,
}

impl Session {
    /// Builds a session for a level with the standard time limit.
    ///
    /// # Errors
    ///
    /// This function returns an error when the engine cannot be built from the level.
    pub(crate) fn new(level: &Level) -> Result<Self> {
        Ok(Self {
            engine: Engine::new(level)?,
            countdown: Countdown::new(LEVEL_TIME_LIMIT),
        })
    }
}

/// Wall-clock countdown owned by the application.
///
/// The countdown starts disarmed and begins running when the player triggers the start of the
/// chase. It only ever reports time; acting on its expiry is the caller's business.
pub(crate) struct Countdown {
    /// Total budget granted when the countdown starts.
    limit: Duration,
    /// Moment the countdown was armed, or `None` while disarmed.
    started_at: Option<Instant>,
}

impl Countdown {
    /// Creates a disarmed countdown with the given budget.
    pub(crate) const fn new(limit: Duration) -> Self {
        Self {
            limit,
            started_at: None,
        }
    }

    /// Arms the countdown, starting the clock.
    pub(crate) fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Returns whether the countdown has been armed.
    pub(crate) const fn started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns the remaining budget, or the full budget while disarmed.
    pub(crate) fn remaining(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self.limit.saturating_sub(started_at.elapsed()),
            None => self.limit,
        }
    }

    /// Returns whether an armed countdown has run dry.
    pub(crate) fn expired(&self) -> bool {
        self.started() && self.remaining() == Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameState;

    #[test]
    fn test_new_app_defaults() {
        let app = App::new(PathBuf::from("."));

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::StartGame));
        assert_eq!(app.level.name, "Default");
        assert!(app.session.is_none());
    }

    #[test]
    fn test_start_session_builds_engine_from_selected_level() {
        let mut app = App::new(PathBuf::from("."));

        app.start_session().expect("default level should be playable");

        let session = app.session.as_ref().expect("session should exist");
        assert_eq!(session.engine.state(), GameState::AwaitingInput);
        assert!(!session.countdown.started());

        app.abort_session();
        assert!(app.session.is_none());
    }

    #[test]
    fn test_countdown_disarmed_reports_full_budget() {
        let countdown = Countdown::new(Duration::from_secs(20));

        assert!(!countdown.started());
        assert_eq!(countdown.remaining(), Duration::from_secs(20));
        assert!(!countdown.expired());
    }

    #[test]
    fn test_countdown_with_zero_budget_expires_once_armed() {
        let mut countdown = Countdown::new(Duration::ZERO);

        assert!(!countdown.expired());
        countdown.start();
        assert!(countdown.expired());
    }

    #[test]
    fn test_tick_session_times_the_engine_out() {
        let mut app = App::new(PathBuf::from("."));
        app.start_session().expect("default level should be playable");

        if let Some(session) = app.session.as_mut() {
            session.countdown = Countdown::new(Duration::ZERO);
            session.countdown.start();
        }
        app.tick_session();

        let session = app.session.as_ref().expect("session should exist");
        assert_eq!(session.engine.state(), GameState::TimedOut);
    }

    #[test]
    fn test_tick_session_without_arming_leaves_the_engine_alone() {
        let mut app = App::new(PathBuf::from("."));
        app.start_session().expect("default level should be playable");

        app.tick_session();

        let session = app.session.as_ref().expect("session should exist");
        assert_eq!(session.engine.state(), GameState::AwaitingInput);
    }
}
