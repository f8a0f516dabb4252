//! Fixed-interval simulation driver.
//!
//! [`GameLoop`] owns the authoritative [`GameState`] and the intent buffer.
//! The host calls [`GameLoop::tick`] as often as it likes (every frame, on a
//! timer); at most one simulation step happens per `tick_interval`, and only
//! while a scheduling chain is armed.

use std::io;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, trace};

use crate::collision::classify;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::food::FoodPlacer;
use crate::game::{DeathReason, GameState, Phase};
use crate::input::{direction_change_is_valid, Direction, InputController};
use crate::snake::Snake;
use crate::stats::{FpsCounter, TickStats};

/// Receives what the loop produces on each accepted tick.
///
/// Both calls get borrowed data only; implementors must not hold on to the
/// snapshot past the call.
pub trait Frontend {
    /// Draws the snapshot.
    fn render(&mut self, snapshot: &GameState) -> io::Result<()>;

    /// Observes per-tick telemetry.
    fn record_stats(&mut self, _stats: &TickStats) {}
}

/// What a call to [`GameLoop::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// No chain is armed (idle, paused or finished).
    Halted,
    /// The interval since the last step has not elapsed yet.
    Waiting,
    /// One step was committed and the game keeps running.
    Advanced,
    /// One step was committed and it ended the game.
    Finished(Phase),
}

/// Minimum-interval gate for simulation steps.
///
/// There is exactly one chain: arming always replaces the previous one, so a
/// restart can never leave two chains firing.
#[derive(Debug, Clone)]
struct TickScheduler {
    interval: Duration,
    last_step: Option<Instant>,
}

impl TickScheduler {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_step: None,
        }
    }

    fn arm(&mut self, now: Instant) {
        self.last_step = Some(now);
    }

    fn cancel(&mut self) {
        self.last_step = None;
    }

    fn is_armed(&self) -> bool {
        self.last_step.is_some()
    }

    /// `None` when no chain is armed; otherwise whether a step is due at
    /// `now`, restarting the interval when it is.
    fn accept(&mut self, now: Instant) -> Option<bool> {
        let last = self.last_step?;
        if now.saturating_duration_since(last) < self.interval {
            return Some(false);
        }

        self.last_step = Some(now);
        Some(true)
    }
}

/// Game state machine plus its scheduler.
#[derive(Debug)]
pub struct GameLoop {
    config: GameConfig,
    state: GameState,
    input: InputController,
    placer: FoodPlacer,
    scheduler: TickScheduler,
    fps: FpsCounter,
    paused: bool,
}

impl GameLoop {
    /// Validates `config` and prepares an idle game with food already placed.
    pub fn new(config: GameConfig, mut placer: FoodPlacer) -> Result<Self, GameError> {
        config.validate()?;

        let state = initial_state(&config, &mut placer, Phase::Idle)?;
        Ok(Self {
            scheduler: TickScheduler::new(config.tick_interval()),
            config,
            state,
            input: InputController::new(),
            placer,
            fps: FpsCounter::new(),
            paused: false,
        })
    }

    /// Starts a new game from any phase.
    ///
    /// Any armed chain is cancelled first; the state is rebuilt from scratch
    /// and exactly one new chain is armed with `now` as its reference.
    pub fn start(&mut self, now: Instant) -> Result<(), GameError> {
        self.scheduler.cancel();

        let state = initial_state(&self.config, &mut self.placer, Phase::Running)?;
        self.state = state;
        self.input.clear();
        self.paused = false;
        self.scheduler.arm(now);

        info!(
            head = ?self.state.head(),
            food = ?self.state.food,
            "game started"
        );
        Ok(())
    }

    /// Buffers a direction for the next step. Last write wins.
    pub fn set_intent(&mut self, direction: Direction) {
        self.input.set_intent(direction);
    }

    /// Suspends the chain of a running game.
    pub fn pause(&mut self) {
        if self.state.phase == Phase::Running && !self.paused {
            self.scheduler.cancel();
            self.paused = true;
            debug!(tick = self.state.tick_count, "paused");
        }
    }

    /// Re-arms the chain of a paused game; the next step is due one interval
    /// after `now`.
    pub fn resume(&mut self, now: Instant) {
        if self.paused {
            self.paused = false;
            self.scheduler.arm(now);
            debug!(tick = self.state.tick_count, "resumed");
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns true while ticks may advance the game.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replaces the running game with a prepared state, after validating it.
    ///
    /// The chain is armed with `now` as reference when the state is running.
    pub fn load_state(&mut self, state: GameState, now: Instant) -> Result<(), GameError> {
        state.validate(&self.config)?;

        self.scheduler.cancel();
        self.input.clear();
        self.paused = false;
        if state.phase == Phase::Running {
            self.scheduler.arm(now);
        }
        self.state = state;
        Ok(())
    }

    /// Advances the game by at most one step.
    ///
    /// On a fault the previous snapshot stays in place and the chain is
    /// cancelled, so the game freezes at the last valid state.
    pub fn tick(
        &mut self,
        now: Instant,
        frontend: &mut dyn Frontend,
    ) -> Result<TickOutcome, GameError> {
        let fps = self.fps.record_frame(now);

        if self.state.phase != Phase::Running {
            return Ok(TickOutcome::Halted);
        }

        match self.scheduler.accept(now) {
            None => return Ok(TickOutcome::Halted),
            Some(false) => return Ok(TickOutcome::Waiting),
            Some(true) => {}
        }

        let next = match self.advance() {
            Ok(next) => next,
            Err(fault) => {
                self.scheduler.cancel();
                error!(error = %fault, tick = self.state.tick_count, "tick aborted");
                return Err(fault);
            }
        };
        self.state = next;

        let outcome = match self.state.phase {
            Phase::Running => TickOutcome::Advanced,
            phase => {
                self.scheduler.cancel();
                TickOutcome::Finished(phase)
            }
        };

        frontend.record_stats(&TickStats::sample(&self.state, fps));
        frontend.render(&self.state)?;

        Ok(outcome)
    }

    /// Computes the next state without touching the committed one.
    fn advance(&mut self) -> Result<GameState, GameError> {
        let current = &self.state;
        let mut next = current.clone();
        next.tick_count += 1;

        if let Some(intent) = self.input.take_intent() {
            if direction_change_is_valid(current.direction, intent) {
                next.direction = intent;
            } else {
                debug!(?intent, current = ?current.direction, "reversal rejected");
            }
        }

        let grid = current.grid();
        let head = current.head().step(next.direction, grid.unit);
        let eats = current.food == Some(head);

        let verdict = classify(head, grid, current.snake.obstacles(eats));
        if let Some(reason) = DeathReason::from_collision(verdict) {
            next.phase = Phase::Lost;
            next.death_reason = Some(reason);
            info!(?reason, score = next.score, tick = next.tick_count, "game lost");
            next.validate(&self.config)?;
            return Ok(next);
        }

        next.snake.advance(head, eats);

        if eats {
            next.score += self.config.points_per_food;
            next.eaten += 1;

            if next.eaten >= self.config.win_target {
                next.phase = Phase::Won;
                next.food = None;
                info!(score = next.score, tick = next.tick_count, "game won");
            } else {
                let food = self.placer.place(&next.snake.occupied(), grid)?;
                debug!(?food, eaten = next.eaten, "food placed");
                next.food = Some(food);
            }
        }

        trace!(tick = next.tick_count, head = ?head, "step");
        next.validate(&self.config)?;
        Ok(next)
    }
}

fn initial_state(
    config: &GameConfig,
    placer: &mut FoodPlacer,
    phase: Phase,
) -> Result<GameState, GameError> {
    let start = Snake::new(config.start_cell());
    let food = placer.place(&start.occupied(), config.grid())?;
    Ok(GameState::initial(config, food, phase))
}
