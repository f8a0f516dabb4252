use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;
use crate::stats::TickStats;

/// Host-side values shown next to the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub win_target: u32,
    /// Latest telemetry; `None` before the first tick of a game.
    pub stats: Option<TickStats>,
    pub paused: bool,
}

/// Renders the score row and the stats row below the play area and returns
/// the play area.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo) -> Rect {
    let [play_area, score_area, stats_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state.score, state.eaten, info.win_target))
            .alignment(Alignment::Center),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(stats_line(info.stats))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        stats_area,
    );

    play_area
}

fn score_line(score: u32, eaten: u32, win_target: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::Gray)),
        Span::styled(score.to_string(), Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled(
            format!("Apples: {eaten}/{win_target}"),
            Style::default().fg(Color::Red),
        ),
    ])
}

fn stats_line(stats: Option<TickStats>) -> Line<'static> {
    match stats {
        Some(stats) => Line::from(format!(
            "FPS: {}  Position: ({}, {})  Frame: {}",
            stats.fps, stats.position.0, stats.position.1, stats.frame
        )),
        None => Line::from("FPS: -  Position: -  Frame: -"),
    }
}
