//! Snake Survival game core.
//!
//! The simulation lives in [`game_loop::GameLoop`]; everything it needs is
//! pure geometry ([`grid`]), collision classification ([`collision`]), food
//! placement ([`food`]) and buffered input ([`input`]). The terminal front end
//! in [`renderer`] and [`ui`] only ever reads snapshots.

pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod game_loop;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod stats;
pub mod terminal_runtime;
pub mod ui;
