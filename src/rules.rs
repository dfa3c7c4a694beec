use crate::error::Result;
use crate::grid::{Coord, Grid, Velocity};
use crate::snake::{Body, Direction};

/// Directions held down during the last input sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionSignals {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionSignals {
    pub fn press(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

impl From<Direction> for DirectionSignals {
    fn from(dir: Direction) -> Self {
        let mut signals = DirectionSignals::default();
        signals.press(dir);
        signals
    }
}

/// Moves the head one step along `velocity`, keeping the old head as the neck.
pub fn advance(body: &mut Body, velocity: Velocity) -> Result<Coord> {
    let new_head = body.head()? + velocity;
    body.grow_from_head(new_head);
    Ok(new_head)
}

pub fn check_eat(grid: &Grid, food: Coord, head: Coord) -> bool {
    grid.wrap(head) == food
}

/// True if the head shares a cell with any other visible segment.
pub fn check_collision(grid: &Grid, body: &Body, size: usize) -> Result<bool> {
    let head = body.head()?;
    Ok((1..size)
        .filter_map(|i| body.at(i))
        .any(|segment| grid.same_cell(head, segment)))
}

/// Picks the new velocity from the pressed directions.
///
/// Directions are tried in `Direction::PRIORITY` order; one that would put the
/// head straight back onto the neck segment is skipped.
pub fn resolve_direction(
    signals: &DirectionSignals,
    body: &Body,
    size: usize,
    current: Velocity,
) -> Result<Velocity> {
    let head = body.head()?;
    let neck = if size > 0 { body.at(1) } else { None };

    let chosen = Direction::PRIORITY
        .iter()
        .filter(|dir| signals.is_pressed(**dir))
        .map(|dir| dir.velocity())
        .find(|v| neck.map_or(true, |neck| head + *v != neck));

    Ok(chosen.unwrap_or(current))
}
