use std::io;
use std::time::{Duration, Instant};

use snake_survival::config::GameConfig;
use snake_survival::food::FoodPlacer;
use snake_survival::game::{DeathReason, GameState, Phase};
use snake_survival::game_loop::{Frontend, GameLoop, TickOutcome};
use snake_survival::grid::Cell;
use snake_survival::input::Direction;
use snake_survival::snake::Snake;

const STEP: Duration = Duration::from_millis(150);

struct Discard;

impl Frontend for Discard {
    fn render(&mut self, _snapshot: &GameState) -> io::Result<()> {
        Ok(())
    }
}

fn scenario(snake: Vec<Cell>, food: Cell, direction: Direction) -> (GameLoop, Instant) {
    let mut game = GameLoop::new(GameConfig::default(), FoodPlacer::seeded(42)).expect("config");
    let t0 = Instant::now();
    game.start(t0).expect("start");

    let eaten = u32::try_from(snake.len() - 1).expect("small snake");
    let state = GameState::from_parts(
        game.config().grid(),
        Snake::from_segments(snake),
        Some(food),
        direction,
        eaten,
        game.config().points_per_food,
    );
    game.load_state(state, t0).expect("valid scenario");
    (game, t0)
}

#[test]
fn three_steps_right_from_the_start_cell() {
    let (mut game, t0) = scenario(vec![Cell::new(200, 200)], Cell::new(0, 0), Direction::Right);

    for step in 1..=3 {
        game.set_intent(Direction::Right);
        game.tick(t0 + STEP * step + Duration::from_millis(5), &mut Discard).expect("tick");
    }

    let state = game.snapshot();
    assert_eq!(state.head(), Cell::new(260, 200));
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.phase, Phase::Running);
}

#[test]
fn food_one_step_ahead_is_eaten() {
    let (mut game, t0) = scenario(vec![Cell::new(200, 200)], Cell::new(220, 200), Direction::Right);

    game.tick(t0 + STEP, &mut Discard).expect("tick");

    let state = game.snapshot();
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.score, 10);
    assert_eq!(state.eaten, 1);
    let food = state.food.expect("food is replaced");
    assert_ne!(food, Cell::new(220, 200));
    assert!(state.snake.segments().all(|cell| *cell != food));
}

#[test]
fn leaving_through_the_left_wall_loses_and_freezes() {
    let (mut game, t0) = scenario(vec![Cell::new(20, 100)], Cell::new(300, 300), Direction::Left);

    assert_eq!(
        game.tick(t0 + STEP, &mut Discard).expect("tick"),
        TickOutcome::Advanced
    );
    assert_eq!(game.snapshot().head(), Cell::new(0, 100));

    assert_eq!(
        game.tick(t0 + STEP * 2, &mut Discard).expect("tick"),
        TickOutcome::Finished(Phase::Lost)
    );
    let lost = game.snapshot().clone();
    assert_eq!(lost.death_reason, Some(DeathReason::WallCollision));

    game.set_intent(Direction::Up);
    for step in 3..10 {
        assert_eq!(
            game.tick(t0 + STEP * step, &mut Discard).expect("tick"),
            TickOutcome::Halted
        );
    }
    assert_eq!(game.snapshot(), &lost);
}

#[test]
fn tenth_apple_wins_on_that_tick() {
    // Nine apples eaten: a ten-cell snake along row 0 heading right, food just ahead.
    let snake: Vec<Cell> = (0..10).rev().map(|column| Cell::new(column * 20, 0)).collect();
    let (mut game, t0) = scenario(snake, Cell::new(200, 0), Direction::Right);
    assert_eq!(game.snapshot().eaten, 9);

    let outcome = game.tick(t0 + STEP, &mut Discard).expect("tick");

    assert_eq!(outcome, TickOutcome::Finished(Phase::Won));
    let won = game.snapshot().clone();
    assert_eq!(won.eaten, 10);
    assert_eq!(won.score, 100);
    assert_eq!(won.snake.len(), 11);
    assert_eq!(won.food, None);

    game.set_intent(Direction::Down);
    game.tick(t0 + STEP * 2, &mut Discard).expect("tick");
    assert_eq!(game.snapshot(), &won);
}

#[test]
fn restart_from_either_terminal_phase_matches_a_fresh_start() {
    let config = GameConfig::default();
    let fresh = {
        let mut game = GameLoop::new(config, FoodPlacer::seeded(1)).expect("config");
        game.start(Instant::now()).expect("start");
        game.snapshot().clone()
    };

    let (mut lost, t0) = scenario(vec![Cell::new(0, 0)], Cell::new(300, 300), Direction::Up);
    lost.tick(t0 + STEP, &mut Discard).expect("tick");
    assert_eq!(lost.snapshot().phase, Phase::Lost);

    lost.start(t0 + STEP * 2).expect("restart");
    let restarted = lost.snapshot();

    assert_eq!(restarted.phase, Phase::Running);
    assert_eq!(restarted.snake, fresh.snake);
    assert_eq!(restarted.direction, fresh.direction);
    assert_eq!(restarted.score, 0);
    assert_eq!(restarted.eaten, 0);
    assert_eq!(restarted.tick_count, 0);
    assert_eq!(restarted.death_reason, None);
    let food = restarted.food.expect("fresh food");
    assert!(!restarted.snake.occupies(food));
    assert!(lost.is_scheduled());

    let snake: Vec<Cell> = (0..10).rev().map(|column| Cell::new(column * 20, 0)).collect();
    let (mut won, t0) = scenario(snake, Cell::new(200, 0), Direction::Right);
    won.tick(t0 + STEP, &mut Discard).expect("tick");
    assert_eq!(won.snapshot().phase, Phase::Won);

    won.start(t0 + STEP * 2).expect("restart");
    assert_eq!(won.snapshot().snake, fresh.snake);
    assert_eq!(won.snapshot().direction, fresh.direction);
    assert_eq!(won.snapshot().eaten, 0);
    assert!(won.snapshot().food.is_some());
}
