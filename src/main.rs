use std::error::Error;
use std::panic;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_survival::config::{GameConfig, default_log_path};
use snake_survival::error::GameError;
use snake_survival::food::FoodPlacer;
use snake_survival::game_loop::{Frontend, GameLoop};
use snake_survival::input::{GameInput, InputHandler};
use snake_survival::logging;
use snake_survival::terminal_runtime::{
    TerminalSession, TerminalView, cleanup_terminal_best_effort,
};
use tracing::{info, warn};

/// Host frame pacing; the game loop decides on its own when to step.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Collect the apples without hitting the walls or yourself")]
struct Cli {
    /// JSON config file; defaults to the per-user config when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Apples needed to win.
    #[arg(long = "win-target")]
    win_target: Option<u32>,

    /// Milliseconds between simulation steps.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Where to write the log.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = logging::init(&log_path) {
        eprintln!("Logging disabled ({}): {error}", log_path.display());
    }

    let config = resolve_config(&cli)?;
    let placer = match cli.seed {
        Some(seed) => FoodPlacer::seeded(seed),
        None => FoodPlacer::from_entropy(),
    };
    let game = GameLoop::new(config, placer)?;
    info!(?config, seed = ?cli.seed, "configuration resolved");

    install_panic_hook();
    run(game)?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<GameConfig, GameError> {
    let mut config = GameConfig::load_or_default(cli.config.as_deref())?;
    if let Some(win_target) = cli.win_target {
        config.win_target = win_target;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    config.validate()?;
    Ok(config)
}

fn run(mut game: GameLoop) -> Result<(), Box<dyn Error>> {
    let mut session = TerminalSession::enter()?;
    let mut view = TerminalView::new(session.terminal_mut(), game.config().win_target);
    view.render(game.snapshot())?;

    let mut input = InputHandler::new();
    loop {
        let mut redraw = false;

        if let Some(game_input) = input.poll_input(Duration::ZERO)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Start => {
                    game.start(Instant::now())?;
                    view.reset_stats();
                    redraw = true;
                }
                GameInput::Pause if game.is_paused() => {
                    game.resume(Instant::now());
                    redraw = true;
                }
                GameInput::Pause => {
                    game.pause();
                    redraw = true;
                }
                GameInput::Direction(direction) => game.set_intent(direction),
            }
        }

        view.set_paused(game.is_paused());
        if let Err(error) = game.tick(Instant::now(), &mut view) {
            warn!(%error, "game loop stopped");
            return Err(error.into());
        }

        // Accepted ticks already drew; menus only change on input.
        if redraw {
            view.render(game.snapshot())?;
        }

        thread::sleep(FRAME_INTERVAL);
    }

    info!(
        score = game.snapshot().score,
        phase = ?game.snapshot().phase,
        "quit"
    );
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
