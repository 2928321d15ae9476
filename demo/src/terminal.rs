use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};
use mapdom::text::{char_width, truncate_to_width};

/// Raw-mode alternate screen with mouse capture. Restores the terminal on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input and drain everything pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Redraw the screen. Rows listed in `reverse` are drawn in reverse video.
    pub fn draw(&mut self, lines: &[String], reverse: &[(u16, u16, u16)]) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        for (y, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16), Print(line))?;
        }
        for &(x, y, width) in reverse {
            let Some(line) = lines.get(y as usize) else {
                continue;
            };
            let cell = slice_cells(line, x as usize, width as usize);
            queue!(
                self.stdout,
                cursor::MoveTo(x, y),
                SetAttribute(Attribute::Reverse),
                Print(cell),
                SetAttribute(Attribute::Reset)
            )?;
        }
        self.stdout.flush()
    }
}

/// The part of `line` covering cells `x..x + width`.
fn slice_cells(line: &str, x: usize, width: usize) -> String {
    let mut col = 0;
    let rest: String = line
        .chars()
        .skip_while(|ch| {
            let start = col;
            col += char_width(*ch);
            start < x
        })
        .collect();
    truncate_to_width(&rest, width)
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
