//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    file_loader,
    level::Level,
    types::{MainMenuItem, OptionsMenuItem, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the UI, and after the
/// poll it gives the running session its countdown tick.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => app.exit = true,
                KeyCode::Char('j') => handle_j_events(app)?,
                KeyCode::Char('k') => handle_k_events(app)?,
                KeyCode::Char('l') => handle_l_events(app)?,
                KeyCode::Char('h') => handle_h_events(app),
                KeyCode::Char('s') => handle_start_event(app),
                KeyCode::Up => handle_move_event(app, 0, -1)?,
                KeyCode::Down => handle_move_event(app, 0, 1)?,
                KeyCode::Left => handle_move_event(app, -1, 0)?,
                KeyCode::Right => handle_move_event(app, 1, 0)?,
                _ => {}
            }
        }
    }

    // The countdown only matters while the in-game screen is up.
    if matches!(app.screen, Screen::InGame) {
        app.tick_session();
    }

    Ok(())
}

/// Handles 'j' key press events for downward navigation.
///
/// This function processes the 'j' key press which is used for moving down in menus and lists.
/// The behavior varies depending on the current screen, handling menu navigation and viewport
/// scrolling appropriately.
pub(crate) fn handle_j_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::Quit);
        }
        Screen::OptionsMenu(OptionsMenuItem::Levels) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Back);
        }
        Screen::LevelMenu => {
            let index = cursor_index(app)?;

            if let Some(next) = app.levels.get(index + 1) {
                app.viewport_level = Some(next.clone());

                // Slide the viewport window down once the cursor walks off its lower edge.
                if app.viewport_height > 0 && index + 1 >= app.viewport_offset + app.viewport_height
                {
                    app.viewport_offset += 1;
                }
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'k' key press events for upward navigation.
///
/// This function processes the 'k' key press which is used for moving up in menus and lists.
/// Like the 'j' handler, behavior varies by screen and includes proper viewport management for
/// scrollable content.
pub(crate) fn handle_k_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Levels);
        }
        Screen::LevelMenu => {
            let index = cursor_index(app)?;

            if let Some(previous_index) = index.checked_sub(1) {
                if let Some(previous) = app.levels.get(previous_index) {
                    app.viewport_level = Some(previous.clone());

                    // Slide the viewport window up once the cursor walks off its upper edge.
                    if previous_index < app.viewport_offset {
                        app.viewport_offset = previous_index;
                    }
                }
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'l' key press events for selection and forward navigation.
///
/// This function processes the 'l' key press which is used for selecting menu items and moving
/// forward in the application flow. It handles screen transitions, level list loading, selection
/// confirmation and session creation across the different contexts.
pub(crate) fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::StartGame) => {
            app.start_session()?;
            app.screen = Screen::InGame;
        }
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Levels);
        }
        Screen::MainMenu(MainMenuItem::Quit) => {
            app.exit = true;
        }
        Screen::OptionsMenu(OptionsMenuItem::Levels) => {
            app.screen = Screen::LevelMenu;

            let first = Level::default();
            app.levels.clear();
            app.levels.push(first.clone());
            file_loader::fetch_levels(&app.levels_dir, &mut app.levels)?;
            app.viewport_level = Some(first);
            app.viewport_offset = 0;
        }
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::LevelMenu => {
            app.level = app
                .viewport_level
                .clone()
                .ok_or_eyre("failed to retrieve cursor-selected level")?;
        }
        _ => {}
    }

    Ok(())
}

/// Handles 'h' key press events for backward navigation.
///
/// This function processes the 'h' key press which is used for moving back or returning to
/// previous screens. Leaving the in-game screen aborts the running session.
pub(crate) fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame => {
            app.abort_session();
            app.screen = Screen::MainMenu(MainMenuItem::StartGame);
        }
        Screen::LevelMenu => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Levels);
        }
        _ => {}
    }
}

/// Handles the 's' key press arming the countdown of a fresh session.
///
/// The chase only begins once the player starts it explicitly; until then directional input is
/// ignored and the countdown stands still. Re-pressing 's' mid-session has no effect.
pub(crate) fn handle_start_event(app: &mut App) {
    if matches!(app.screen, Screen::InGame) {
        if let Some(session) = app.session.as_mut() {
            if !session.countdown.started() {
                session.countdown.start();
            }
        }
    }
}

/// Handles arrow key presses as directional move requests.
///
/// Directional input only reaches the engine while the in-game screen is up and the session has
/// been started; the engine itself ignores input in terminal states.
pub(crate) fn handle_move_event(app: &mut App, dx: isize, dy: isize) -> Result<()> {
    if !matches!(app.screen, Screen::InGame) {
        return Ok(());
    }

    if let Some(session) = app.session.as_mut() {
        if session.countdown.started() {
            session.engine.attempt_player_move(dx, dy)?;
        }
    }

    Ok(())
}

/// Returns the index of the cursor-selected level within the level list.
fn cursor_index(app: &App) -> Result<usize> {
    let cursor = app
        .viewport_level
        .clone()
        .ok_or_eyre("failed to retrieve cursor-selected level")?;

    Ok(app
        .levels
        .iter()
        .position(|level| *level == cursor)
        .unwrap_or(0))
}
