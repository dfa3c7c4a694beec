//! Snake on a wraparound grid.
//!
//! The simulation core (`grid`, `snake`, `food`, `rules`, `state`, `clock`)
//! knows nothing about terminals; `game` and `term` drive it from crossterm.

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod logging;
pub mod rules;
pub mod snake;
pub mod state;
pub mod term;

pub use error::SnakeError;
pub use grid::{wrap, Coord, Grid, Velocity};
pub use rules::DirectionSignals;
pub use snake::{Body, Direction};
pub use state::{GameState, Snapshot, Status, TickReport};
