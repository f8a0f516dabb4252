use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::game::{GameState, Phase};
use crate::grid::{Cell, Grid};
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_lost_menu, render_pause_menu, render_start_menu, render_won_menu};

/// Terminal columns per grid cell, so cells look roughly square.
pub const CELL_WIDTH: u16 = 2;

const GLYPH_EMPTY: &str = " ·";
const GLYPH_SNAKE: &str = "██";
const GLYPH_FOOD: &str = "●●";

const COLOR_GRID: Color = Color::DarkGray;
const COLOR_SNAKE_HEAD: Color = Color::Green;
const COLOR_SNAKE_BODY: Color = Color::LightGreen;
const COLOR_FOOD: Color = Color::Red;
const COLOR_BORDER: Color = Color::Gray;

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, info);

    let block = Block::bordered()
        .title(" Snake Survival ")
        .border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_grid(frame, inner, state.grid());
    if let Some(food) = state.food {
        render_food(frame, inner, state.grid(), food);
    }
    render_snake(frame, inner, state);

    if info.paused {
        render_pause_menu(frame, play_area);
        return;
    }

    match state.phase {
        Phase::Idle => render_start_menu(frame, play_area, info.win_target),
        Phase::Lost => render_lost_menu(frame, play_area, state.score, state.death_reason),
        Phase::Won => render_won_menu(frame, play_area, state.score),
        Phase::Running => {}
    }
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, grid: Grid) {
    let style = Style::new().fg(COLOR_GRID);
    let buffer = frame.buffer_mut();
    for cell in grid.cells() {
        if let Some((x, y)) = logical_to_terminal(inner, grid, cell) {
            buffer.set_string(x, y, GLYPH_EMPTY, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, grid: Grid, food: Cell) {
    let Some((x, y)) = logical_to_terminal(inner, grid, food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let grid = state.grid();
    let buffer = frame.buffer_mut();

    // Tail first so the head is painted last.
    let segments: Vec<&Cell> = state.snake.segments().collect();
    for (index, segment) in segments.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, grid, **segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(COLOR_SNAKE_HEAD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(COLOR_SNAKE_BODY)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Maps a grid cell to the terminal position of its left column.
fn logical_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    let (column, row) = grid.column_row(cell)?;

    let x = inner.x.saturating_add(column.saturating_mul(CELL_WIDTH));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
