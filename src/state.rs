//! The game state and its per-tick state machine.

use log::{debug, info, trace};
use rand::Rng;

use crate::error::Result;
use crate::food::place_food;
use crate::grid::{Coord, Grid, Velocity};
use crate::rules::{advance, check_collision, check_eat, resolve_direction, DirectionSignals};
use crate::snake::Body;

pub const INITIAL_SNAKE_SIZE: usize = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Lost,
}

/// What a single tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub ate: bool,
    pub died: bool,
    pub status: Status,
}

/// Read-only view handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Wrapped cells of the visible snake, head first.
    pub segments: Vec<Coord>,
    pub food: Coord,
    pub status: Status,
    pub velocity: Velocity,
    pub grid_size: i64,
}

#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    body: Body,
    size: usize,
    velocity: Velocity,
    food: Coord,
    status: Status,
}

impl GameState {
    /// Starts a game with a random head and food on a free cell.
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Result<Self> {
        let body = Body::new(grid.random_cell(rng));
        let food = place_food(&grid, body.visible(INITIAL_SNAKE_SIZE), rng)?;
        let head = body.head()?;
        info!(
            "new game on {0}x{0} grid, head at ({1}, {2}), food at ({3}, {4})",
            grid.size(),
            head.x,
            head.y,
            food.x,
            food.y
        );

        Ok(GameState {
            grid,
            body,
            size: INITIAL_SNAKE_SIZE,
            velocity: Velocity::ZERO,
            food,
            status: Status::Running,
        })
    }

    /// Builds a running state from explicit parts. `food` is stored wrapped.
    pub fn from_parts(grid: Grid, body: Body, size: usize, velocity: Velocity, food: Coord) -> Self {
        GameState {
            grid,
            body,
            size,
            velocity,
            food: grid.wrap(food),
            status: Status::Running,
        }
    }

    /// Runs one fixed-timestep simulation step.
    ///
    /// Eat is evaluated before collision and both see the same post-move body,
    /// so one tick can grow the snake and end the game. Food eaten in that
    /// tick is still relocated.
    ///
    /// On `Err` the body and size may already have changed; the state must
    /// not be ticked again.
    pub fn tick<R: Rng + ?Sized>(&mut self, signals: &DirectionSignals, rng: &mut R) -> Result<TickReport> {
        if self.status == Status::Lost {
            return Ok(self.report(false, false));
        }

        self.velocity = resolve_direction(signals, &self.body, self.size, self.velocity)?;
        let head = advance(&mut self.body, self.velocity)?;

        let ate = check_eat(&self.grid, self.food, head);
        if ate {
            self.size += 1;
        }

        let died = check_collision(&self.grid, &self.body, self.size)?;
        if died {
            self.status = Status::Lost;
            self.velocity = Velocity::ZERO;
            info!("snake collided with itself at length {}", self.size);
        }

        if ate {
            self.food = place_food(&self.grid, self.body.visible(self.size), rng)?;
            debug!("food eaten, snake length now {}", self.size);
        }

        // Keep the vacated tail cell so the neck check still works at size 1.
        self.body.retain(self.size + 1);

        trace!("head ({}, {}) size {} segments {:?}", head.x, head.y, self.size, self.body.visible(self.size));
        Ok(self.report(ate, died))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self
                .body
                .visible(self.size)
                .iter()
                .map(|c| self.grid.wrap(*c))
                .collect(),
            food: self.food,
            status: self.status,
            velocity: self.velocity,
            grid_size: self.grid.size(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn food(&self) -> Coord {
        self.food
    }

    pub fn status(&self) -> Status {
        self.status
    }

    fn report(&self, ate: bool, died: bool) -> TickReport {
        TickReport { ate, died, status: self.status }
    }
}
