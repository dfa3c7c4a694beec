use std::collections::HashSet;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SnakeError};
use crate::grid::{Coord, Grid};

/// Random draws per grid cell before falling back to scanning free cells.
pub const MAX_PLACEMENT_ATTEMPTS_PER_CELL: usize = 4;

/// Picks a uniformly random cell that none of `occupied` wraps onto.
pub fn place_food<R: Rng + ?Sized>(grid: &Grid, occupied: &[Coord], rng: &mut R) -> Result<Coord> {
    let taken: HashSet<Coord> = occupied.iter().map(|c| grid.wrap(*c)).collect();

    if taken.len() >= grid.cell_count() {
        return Err(SnakeError::FoodPlacementExhausted {
            grid_size: grid.size(),
            occupied: taken.len(),
        });
    }

    let attempts = MAX_PLACEMENT_ATTEMPTS_PER_CELL * grid.cell_count();
    for _ in 0..attempts {
        let cell = grid.random_cell(rng);
        if !taken.contains(&cell) {
            debug!("food placed at ({}, {})", cell.x, cell.y);
            return Ok(cell);
        }
    }

    warn!("food sampling missed {} times, scanning free cells", attempts);
    let free: Vec<Coord> = grid.cells().filter(|c| !taken.contains(c)).collect();
    free.choose(rng).copied().ok_or(SnakeError::FoodPlacementExhausted {
        grid_size: grid.size(),
        occupied: taken.len(),
    })
}
