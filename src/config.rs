use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::error::Result;
use crate::grid::{Grid, MAX_GRID_SIZE, MIN_GRID_SIZE};

pub const DEFAULT_GRID_SIZE: i64 = 20;
pub const DEFAULT_TICK_MS: u64 = 100;

/// Snake on a wraparound grid, played in the terminal.
#[derive(Clone, Debug, Parser)]
#[command(name = "wrapsnake", version)]
pub struct Config {
    /// Cells per side of the square play area.
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = clap::value_parser!(i64).range(MIN_GRID_SIZE..=MAX_GRID_SIZE)
    )]
    pub grid_size: i64,

    /// Milliseconds between simulation steps.
    #[arg(long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// File the log is written to.
    #[arg(long, default_value = "wrapsnake.log")]
    pub log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn grid(&self) -> Result<Grid> {
        Grid::new(self.grid_size)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grid_size: DEFAULT_GRID_SIZE,
            tick_ms: DEFAULT_TICK_MS,
            log_file: PathBuf::from("wrapsnake.log"),
            log_level: LevelFilter::Info,
        }
    }
}
