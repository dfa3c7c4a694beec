use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use log::info;
use rand::rngs::ThreadRng;

use crate::clock::TickClock;
use crate::config::Config;
use crate::rules::DirectionSignals;
use crate::snake::Direction::{self, *};
use crate::state::{GameState, Snapshot, Status};
use crate::term::{ScreenPos, TermInt, TermManager};

const WINDOW_NAME: &str = "wrapsnake";
const POLL_INTERVAL_MS: u64 = 5;
const CELL_WIDTH: TermInt = 2;

const SNAKE_BODY: &str = "██";
const DEAD_SNAKE: &str = "XX";
const FOOD: &str = "()";
const EMPTY_CELL: &str = " ·";

/// Terminal frontend: feeds key presses into the game state and draws it.
pub struct SnakeGame {
    term: TermManager,
    state: GameState,
    clock: TickClock,
    rng: ThreadRng,
    origin: ScreenPos,
    running: bool,
}

impl SnakeGame {
    pub fn new(config: &Config) -> Result<Self> {
        let grid = config.grid()?;
        let mut rng = rand::thread_rng();
        let state = GameState::new(grid, &mut rng)?;
        let term = TermManager::new().context("reading terminal size")?;

        let (cols, rows) = frame_size(grid.size());
        let (width, height) = term.size();
        if cols > width || rows > height {
            bail!(
                "terminal is {}x{} but a {}-cell grid needs {}x{}",
                width,
                height,
                grid.size(),
                cols,
                rows
            );
        }
        let origin = ((width - cols) / 2, (height - rows) / 2);

        Ok(SnakeGame {
            term,
            state,
            clock: TickClock::new(config.tick()),
            rng,
            origin,
            running: true,
        })
    }

    /// Runs until the player quits. The terminal is restored on every exit path.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup(WINDOW_NAME).context("setting up terminal")?;
        let res = self.play();
        self.term.restore().context("restoring terminal")?;
        res
    }

    fn play(&mut self) -> Result<()> {
        self.term.clear()?;
        let (cols, rows) = frame_size(self.state.grid().size());
        self.term.draw_borders(self.origin, cols, rows - 1)?;
        self.render()?;

        let mut signals = DirectionSignals::default();
        let mut last_frame = Instant::now();

        while self.running {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                if is_quit(&key_ev) {
                    info!("quit requested");
                    self.running = false;
                } else if let Some(dir) = key_direction(&key_ev) {
                    signals.press(dir);
                }
            }

            let now = Instant::now();
            let due = self.clock.advance(now - last_frame);
            last_frame = now;

            if due {
                let input = std::mem::take(&mut signals);
                let report = self.state.tick(&input, &mut self.rng)?;
                if report.died {
                    info!("game over, final length {}", self.state.size());
                }
                self.render()?;
            }
        }

        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let snap = self.state.snapshot();
        let n = snap.grid_size;
        let lost = snap.status == Status::Lost;

        for y in 0..n {
            for x in 0..n {
                self.term.print_str_at(cell_pos(self.origin, x, y), EMPTY_CELL, Color::DarkGrey)?;
            }
        }

        self.term.print_str_at(cell_pos(self.origin, snap.food.x, snap.food.y), FOOD, Color::Yellow)?;

        let (snake_color, body) = if lost { (Color::Red, DEAD_SNAKE) } else { (Color::White, SNAKE_BODY) };
        // Tail first so the head wins when segments overlap.
        for (i, seg) in snap.segments.iter().enumerate().rev() {
            let glyph = if i == 0 && !lost { head_glyph(&snap) } else { body.to_string() };
            self.term.print_str_at(cell_pos(self.origin, seg.x, seg.y), &glyph, snake_color)?;
        }

        let status_y = self.origin.1 + n as TermInt + 2;
        let status = format!("Length: {:<5} Arrows/WASD to steer, q or Esc to quit", snap.segments.len());
        self.term.print_str_at((self.origin.0, status_y), &status, Color::Reset)?;

        if lost {
            let score = format!("Length: {}", snap.segments.len());
            self.term.show_message(&["Game over!", &score, "", "Press q to quit."])?;
        }

        self.term.flush()?;
        Ok(())
    }
}

/// Screen position of a wrapped grid cell inside the border at `origin`.
fn cell_pos(origin: ScreenPos, x: i64, y: i64) -> ScreenPos {
    (
        origin.0 + 1 + x as TermInt * CELL_WIDTH,
        origin.1 + 1 + y as TermInt,
    )
}

/// Columns and rows taken by the bordered grid plus the status line.
fn frame_size(grid_size: i64) -> (TermInt, TermInt) {
    let n = TermInt::try_from(grid_size).unwrap_or(TermInt::MAX);
    (n.saturating_mul(CELL_WIDTH).saturating_add(2), n.saturating_add(3))
}

fn head_glyph(snap: &Snapshot) -> String {
    match Direction::from_velocity(snap.velocity) {
        Some(dir) => dir.head_char().to_string().repeat(2),
        None => SNAKE_BODY.to_string(),
    }
}

fn key_direction(ev: &KeyEvent) -> Option<Direction> {
    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Up),
        KeyCode::Char('a') | KeyCode::Left => Some(Left),
        KeyCode::Char('s') | KeyCode::Down => Some(Down),
        KeyCode::Char('d') | KeyCode::Right => Some(Right),
        _ => None,
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }
            | KeyEvent { code: KeyCode::Esc, .. }
            | KeyEvent { code: KeyCode::Char('q'), .. }
    )
}
