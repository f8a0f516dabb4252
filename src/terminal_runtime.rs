use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::GameState;
use crate::game_loop::Frontend;
use crate::renderer;
use crate::stats::TickStats;
use crate::ui::hud::HudInfo;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Restores the terminal; used by `Drop` and the panic hook.
pub fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Render and stats collaborator for the terminal host.
///
/// Keeps only host-side values (latest telemetry, pause flag); the game
/// snapshot is borrowed for the duration of each draw.
pub struct TerminalView<'a> {
    terminal: &'a mut AppTerminal,
    win_target: u32,
    stats: Option<TickStats>,
    paused: bool,
}

impl<'a> TerminalView<'a> {
    pub fn new(terminal: &'a mut AppTerminal, win_target: u32) -> Self {
        Self {
            terminal,
            win_target,
            stats: None,
            paused: false,
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Forgets telemetry from a previous game.
    pub fn reset_stats(&mut self) {
        self.stats = None;
    }
}

impl Frontend for TerminalView<'_> {
    fn render(&mut self, snapshot: &GameState) -> io::Result<()> {
        let info = HudInfo {
            win_target: self.win_target,
            stats: self.stats,
            paused: self.paused,
        };
        self.terminal
            .draw(|frame| renderer::render(frame, snapshot, &info))?;
        Ok(())
    }

    fn record_stats(&mut self, stats: &TickStats) {
        self.stats = Some(*stats);
    }
}
