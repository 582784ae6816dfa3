//! User interface rendering functions for all application screens.

use std::{rc::Rc, time::Duration};

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    app::Session,
    engine::GameState,
    grid::Position,
    tile::Tile,
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item)?,
        Screen::OptionsMenu(item) => options_menu(frame, *item)?,
        Screen::InGame => in_game(app, frame)?,
        Screen::LevelMenu => level_menu(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and options menus.
///
/// This function creates the common layout and block structure used by both main and options
/// menus. The generic part includes the centered positioning and border styling, while the
/// specific menu content is handled by the caller using the [`MenuType`] parameter.
///
/// # Errors
///
/// This function may return errors when the computed layout misses the expected regions.
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Result<Rc<[Rect]>> {
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(frame.area())
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered menu band from vertical layout")?;
    let space = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(40),
    ])
    .split(space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered menu band from horizontal layout")?;

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)
        .first()
        .copied()
        .ok_or_eyre("failed to get menu area from layout")?;

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Ok(Layout::vertical(vec![Constraint::Max(1); menu.value() as usize]).split(inner_space))
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Options", and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
///
/// # Errors
///
/// This function may return errors from menu layout initialization.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) -> Result<()> {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(3))?;

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Start Game").centered();
    let mut opt2 = Line::raw("Options").centered();
    let mut opt3 = Line::raw("Quit").centered();
    match item {
        MainMenuItem::StartGame => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Options => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Quit => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(active_content_style);
        }
    }

    frame.render_widget(
        opt1,
        inner_layout
            .first()
            .copied()
            .ok_or_eyre("failed to get first main menu row")?,
    );
    frame.render_widget(
        opt2,
        inner_layout
            .get(1)
            .copied()
            .ok_or_eyre("failed to get second main menu row")?,
    );
    frame.render_widget(
        opt3,
        inner_layout
            .get(2)
            .copied()
            .ok_or_eyre("failed to get third main menu row")?,
    );

    Ok(())
}

/// Renders the options menu screen.
///
/// This function displays the options menu with the "Levels" and "Return" entries, highlighting
/// the currently selected one.
///
/// # Errors
///
/// This function may return errors from menu layout initialization.
pub(crate) fn options_menu(frame: &mut Frame, item: OptionsMenuItem) -> Result<()> {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::OptionsMenu(2))?;

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Levels").centered();
    let mut opt2 = Line::raw("Return").centered();
    match item {
        OptionsMenuItem::Levels => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
        }
        OptionsMenuItem::Back => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
        }
    }

    frame.render_widget(
        opt1,
        inner_layout
            .first()
            .copied()
            .ok_or_eyre("failed to get first options menu row")?,
    );
    frame.render_widget(
        opt2,
        inner_layout
            .get(1)
            .copied()
            .ok_or_eyre("failed to get second options menu row")?,
    );

    Ok(())
}

/// Renders the level selection screen.
///
/// This function renders a hovering viewport over the list of levels discovered in the levels
/// directory. The cursor row is highlighted and the level the game is currently set to play is
/// marked with a dot in the selector column.
///
/// # Errors
///
/// This function may return errors when the cursor-selected level is missing or the computed
/// layout misses the expected regions.
pub(crate) fn level_menu(app: &mut App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Percentage(30),
    ])
    .split(frame.area())
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered level list band from horizontal layout")?;
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Fill(1),
        Constraint::Percentage(40),
    ])
    .split(space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered level list band from vertical layout")?;

    let layout = Layout::vertical([Constraint::Min(1)])
        .split(space)
        .first()
        .copied()
        .ok_or_eyre("failed to get level list area from layout")?;
    let block = Block::bordered()
        .title_top("Level list")
        .title_bottom("(j) down / (k) up / (l) select / (h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    app.viewport_height = inner_space.height.into();

    let inner_layout = Layout::horizontal([Constraint::Percentage(5), Constraint::Percentage(100)])
        .split(inner_space);
    let selector_rows = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()])
        .split(
            inner_layout
                .first()
                .copied()
                .ok_or_eyre("failed to get selector column from layout")?,
        );
    let entry_rows = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()]).split(
        inner_layout
            .get(1)
            .copied()
            .ok_or_eyre("failed to get entry column from layout")?,
    );

    let cursor = app
        .viewport_level
        .clone()
        .ok_or_eyre("failed to retrieve cursor-selected level")?;

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let window = app
        .levels
        .iter()
        .skip(app.viewport_offset)
        .take(inner_space.height.into());

    for ((level, selector_area), entry_area) in
        window.zip(selector_rows.iter()).zip(entry_rows.iter())
    {
        let style = if *level == cursor {
            active_content_style
        } else {
            content_style
        };
        let marker = if *level == app.level { DOT } else { " " };

        frame.render_widget(Line::styled(marker, style).centered(), *selector_area);
        frame.render_widget(Line::styled(level.name.clone(), style), *entry_area);
    }

    Ok(())
}

/// Renders the in-game screen with the playing field, countdown and status messages.
///
/// This function draws the running session's grid through a [`Canvas`] widget, coloring each tile
/// kind differently, together with the countdown readout and the contextual status line: the
/// start prompt before the chase begins and the result message once the session has ended.
///
/// # Errors
///
/// This function may return errors when no session is running or from coordinate conversion
/// failures.
#[expect(
    clippy::too_many_lines,
    reason = "UI rendering function requires many lines for layout and drawing operations."
)]
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let session = app
        .session
        .as_ref()
        .ok_or_eyre("no active game session to render")?;
    let engine = &session.engine;

    let grid_rows = engine.grid().height();
    let grid_columns = engine.grid().width();

    // Overall layout: countdown row, playing field with padding, tooltip at the bottom.
    let overall_layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .split(frame.area());

    let timer_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get countdown area from layout")?;
    let field_content_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get field content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    frame.render_widget(
        Line::styled(
            format_remaining(session.countdown.remaining()),
            Style::default().fg(Color::Red),
        )
        .right_aligned(),
        timer_area,
    );

    // Center the field within the content area.
    let field_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(grid_rows)?),
        Constraint::Min(1),
    ])
    .split(field_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get field area from vertical layout")?;
    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(grid_columns)?),
        Constraint::Min(1),
    ])
    .split(field_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get field space from horizontal layout")?;

    // Group cell coordinates by how they are drawn; floor stays blank.
    let mut obstacle_coords = Vec::new();
    let mut exit_coords = Vec::new();
    let mut player_coords = Vec::new();
    let mut pursuer_coords = Vec::new();
    for (row, cells) in engine.grid().rows().iter().enumerate() {
        for (col, tile) in cells.iter().enumerate() {
            match tile {
                Tile::Obstacle => obstacle_coords.push((col, row)),
                Tile::Exit => exit_coords.push((col, row)),
                Tile::Player | Tile::ExitOccupied => player_coords.push((col, row)),
                Tile::Pursuer => pursuer_coords.push((col, row)),
                Tile::Floor => {}
            }
        }
    }

    // Pre-compute canvas coordinates to handle errors before the paint closure.
    let obstacle_canvas = grid_to_canvas_coords(&obstacle_coords, grid_rows, grid_columns)?;
    let exit_canvas = grid_to_canvas_coords(&exit_coords, grid_rows, grid_columns)?;
    let player_canvas = grid_to_canvas_coords(&player_coords, grid_rows, grid_columns)?;
    let pursuer_canvas = grid_to_canvas_coords(&pursuer_coords, grid_rows, grid_columns)?;

    let field = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &obstacle_canvas,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &exit_canvas,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &pursuer_canvas,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &player_canvas,
                color: Color::White,
            });
        });

    frame.render_widget(field, space);

    // Contextual status line hovering over the field.
    if let Some(message) = status_message(session) {
        let message_area = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .split(field_content_area)
            .first()
            .copied()
            .ok_or_eyre("failed to get status message area from layout")?;

        frame.render_widget(
            Line::styled(message, Style::default().fg(Color::White).bg(Color::Green)).centered(),
            message_area,
        );
    }

    // Render tooltip as a block at the bottom center with top border.
    let tooltip_block = Block::bordered()
        .title("(s) start / arrows move / (h) return to menu")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    let tooltip_inner = tooltip_block.inner(tooltip_full_area);

    frame.render_widget(tooltip_block, tooltip_full_area);

    if engine.pursuer_unreachable() {
        frame.render_widget(
            Line::styled(
                "level defect: the pursuer cannot reach the player",
                Style::default().fg(Color::Red),
            )
            .centered(),
            tooltip_inner,
        );
    }

    Ok(())
}

/// Picks the status line for the session's current situation.
///
/// Terminal states carry their result message; a session that has not been started yet shows the
/// start prompt. While the chase is running no status line is shown.
fn status_message(session: &Session) -> Option<&'static str> {
    match session.engine.state() {
        GameState::Won => Some("You escaped the maze!"),
        GameState::Lost => Some("The pursuer caught you..."),
        GameState::TimedOut => Some("You ran out of time..."),
        GameState::AwaitingInput => {
            (!session.countdown.started()).then_some("(s) begin the chase")
        }
    }
}

/// Transforms grid coordinates to canvas coordinates for field rendering.
///
/// This function converts grid coordinates (col, row) to canvas coordinates (x, y) using the
/// transformation formulas coordinate[i] = (n - 1) / 2 - i for rows (ascending order) and
/// coordinate[i] = i - (n - 1) / 2 for columns (descending order).
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn grid_to_canvas_coords(
    coords: &[Position],
    grid_rows: usize,
    grid_columns: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(grid_rows)?);
    let cols_n = f64::from(u16::try_from(grid_columns)?);

    coords
        .iter()
        .map(|&(col, row)| {
            let canvas_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);
            let canvas_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((canvas_x, canvas_y))
        })
        .collect()
}

/// Formats a remaining duration as a `MM:SS.cc` countdown readout.
fn format_remaining(remaining: Duration) -> String {
    let total_millis = remaining.as_millis();
    let minutes = total_millis / 60_000;
    let seconds = (total_millis % 60_000) / 1_000;
    let centis = (total_millis % 1_000) / 10;

    format!("{minutes:02}:{seconds:02}.{centis:02}")
}
