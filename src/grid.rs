use std::ops::Add;

use rand::Rng;

use crate::error::{Result, SnakeError};

pub const MIN_GRID_SIZE: i64 = 2;
/// Largest grid whose bordered frame still fits in `u16` terminal columns.
pub const MAX_GRID_SIZE: i64 = 1024;

/// Floored modulo: maps any `v` into `[0, n)`, also for negative `v`.
pub fn wrap(v: i64, n: i64) -> i64 {
    v.rem_euclid(n)
}

/// An unbounded cell coordinate. Only wrapped when it is compared or drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Coord { x, y }
    }
}

impl Add<Velocity> for Coord {
    type Output = Coord;

    fn add(self, v: Velocity) -> Coord {
        Coord::new(self.x + v.dx, self.y + v.dy)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i64,
    pub dy: i64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub const fn new(dx: i64, dy: i64) -> Self {
        Velocity { dx, dy }
    }
}

/// Square toroidal play area of `size` x `size` cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i64,
}

impl Grid {
    pub fn new(size: i64) -> Result<Self> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(SnakeError::InvalidGridSize { size, min: MIN_GRID_SIZE, max: MAX_GRID_SIZE });
        }
        Ok(Grid { size })
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size
            .checked_mul(self.size)
            .and_then(|cells| usize::try_from(cells).ok())
            .unwrap_or(usize::MAX)
    }

    pub fn wrap(&self, c: Coord) -> Coord {
        Coord::new(wrap(c.x, self.size), wrap(c.y, self.size))
    }

    /// True if both coordinates land on the same cell once wrapped.
    pub fn same_cell(&self, a: Coord, b: Coord) -> bool {
        self.wrap(a) == self.wrap(b)
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        Coord::new(rng.gen_range(0..self.size), rng.gen_range(0..self.size))
    }

    /// Every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let n = self.size;
        (0..n).flat_map(move |y| (0..n).map(move |x| Coord::new(x, y)))
    }
}
