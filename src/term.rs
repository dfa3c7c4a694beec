use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal, Result};

pub type TermInt = u16;
pub type ScreenPos = (TermInt, TermInt);

/// Owns stdout while the game runs: raw mode, alternate screen, drawing.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout(), active: false })
    }

    pub fn setup(&mut self, title: &str) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, terminal::SetTitle(title))?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.active = true;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    /// Drains every key event that is already waiting.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn size(&self) -> ScreenPos {
        (self.width, self.height)
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn draw_borders(&mut self, top_left: ScreenPos, width: TermInt, height: TermInt) -> Result<()> {
        let (x0, y0) = top_left;
        let end_x = x0 + width - 1;
        let end_y = y0 + height - 1;

        queue!(self.stdout, SetForegroundColor(Color::DarkGrey))?;
        for x in x0..=end_x {
            let ch = if x == x0 || x == end_x { '+' } else { '-' };
            self.print_at((x, y0), ch)?;
            self.print_at((x, end_y), ch)?;
        }

        for y in y0 + 1..end_y {
            self.print_at((x0, y), '|')?;
            self.print_at((end_x, y), '|')?;
        }

        queue!(self.stdout, ResetColor)?;
        self.flush()
    }

    pub fn print_at(&mut self, pos: ScreenPos, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), Print(ch))
    }

    pub fn print_str_at(&mut self, pos: ScreenPos, s: &str, color: Color) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), SetForegroundColor(color), Print(s), ResetColor)
    }

    /// Centered box of text over whatever is on screen.
    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        let blank = " ".repeat(msg_width as usize);
        self.print_str_at(top_left, &blank, Color::Reset)?;
        self.print_str_at((top_left.0, top_left.1 + msg_height - 1), &blank, Color::Reset)?;

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            self.print_str_at((top_left.0, y), &padded_line, Color::Reset)?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
