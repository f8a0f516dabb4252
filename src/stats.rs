use std::time::{Duration, Instant};

use crate::game::GameState;
use crate::grid::Cell;

const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Telemetry emitted once per accepted tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickStats {
    /// Accepted ticks since the last start.
    pub frame: u64,
    /// Trigger rate over the last full one-second window.
    pub fps: u32,
    pub head: Cell,
    /// Head as grid column and row.
    pub position: (u16, u16),
    pub score: u32,
}

impl TickStats {
    #[must_use]
    pub fn sample(state: &GameState, fps: u32) -> Self {
        let head = state.head();
        Self {
            frame: state.tick_count,
            fps,
            head,
            position: state.grid().column_row(head).unwrap_or_default(),
            score: state.score,
        }
    }
}

/// Counts host triggers and turns them into a frames-per-second figure once
/// per window.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    window_start: Option<Instant>,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one trigger at `now` and returns the current figure.
    pub fn record_frame(&mut self, now: Instant) -> u32 {
        let start = *self.window_start.get_or_insert(now);
        self.frames = self.frames.saturating_add(1);

        let elapsed = now.saturating_duration_since(start);
        if elapsed >= FPS_WINDOW {
            let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            let fps = (u64::from(self.frames) * 1000 + millis / 2) / millis;
            self.fps = u32::try_from(fps).unwrap_or(u32::MAX);
            self.frames = 0;
            self.window_start = Some(now);
        }

        self.fps
    }
}
