use anyhow::Result;
use clap::Parser;
use log::{error, info};

use wrapsnake::config::Config;
use wrapsnake::game::SnakeGame;
use wrapsnake::logging::init_log;

fn main() -> Result<()> {
    let config = Config::parse();
    init_log(config.log_level, &config.log_file)?;
    info!(
        "starting: grid {}, tick {}ms",
        config.grid_size, config.tick_ms
    );

    let mut game = SnakeGame::new(&config)?;
    // The game loop restores the terminal before handing errors back.
    if let Err(e) = game.run() {
        error!("{:#}", e);
        return Err(e);
    }

    info!("bye");
    Ok(())
}
