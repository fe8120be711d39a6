use std::io::{stderr, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::warn;
use quickpick_core::error::Result;
use quickpick_core::frame::Frame;
use quickpick_core::selector::Key;
use quickpick_core::terminal::Terminal;

use super::colors::Theme;
use super::keys::key_from_event;
use crate::interrupt;

/// How long to wait for input before checking for a process interrupt
const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        interrupt::set_capturing(true);
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        interrupt::set_capturing(false);
    }
}

fn write_restore<W: Write>(out: &mut W) -> std::io::Result<()> {
    execute!(out, DisableMouseCapture, LeaveAlternateScreen, Show)
}

/// Puts the terminal back in its normal state, whatever a session left behind.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = write_restore(&mut stderr());
}

/// Restores the terminal before the panic message is printed.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

/// A [`Terminal`] on the real terminal device, drawing to `out`.
pub struct CrosstermTerminal<W: Write> {
    out: W,
    theme: Theme,
    raw_mode: Option<RawModeGuard>,
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            raw_mode: None,
        }
    }

    fn restore_screen(&mut self, clear: bool) -> Result<()> {
        execute!(self.out, DisableMouseCapture, LeaveAlternateScreen, Show)?;
        if clear {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn attach(&mut self) -> Result<()> {
        if self.raw_mode.is_some() {
            return Ok(());
        }

        execute!(self.out, EnterAlternateScreen)?;
        match RawModeGuard::enable() {
            // When the guard is dropped, raw mode is disabled
            Ok(guard) => self.raw_mode = Some(guard),
            Err(e) => {
                let _ = execute!(self.out, LeaveAlternateScreen);
                return Err(e);
            }
        }
        execute!(self.out, EnableMouseCapture, Hide)?;
        Ok(())
    }

    fn detach(&mut self, clear: bool) -> Result<()> {
        if self.raw_mode.take().is_none() {
            return Ok(());
        }

        self.restore_screen(clear)
    }

    fn next_key(&mut self) -> Result<Key> {
        loop {
            if interrupt::take() {
                return Ok(Key::Interrupt);
            }

            if event::poll(POLL_INTERVAL)? {
                return Ok(key_from_event(&event::read()?));
            }
        }
    }

    fn rows(&self) -> Result<Option<usize>> {
        Ok(terminal::size().ok().map(|(_, rows)| rows as usize))
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        queue!(self.out, MoveTo(0, 0))?;

        for (row, line) in frame.lines.iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16))?;

            for segment in &line.segments {
                let style = self.theme.style_for(segment.kind);
                if style.bold {
                    queue!(self.out, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    self.out,
                    SetForegroundColor(style.foreground),
                    Print(&segment.text),
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(Color::Reset),
                )?;
            }

            queue!(self.out, Clear(ClearType::UntilNewLine))?;
        }

        // Rows below the box may hold a longer previous frame
        queue!(
            self.out,
            MoveTo(0, frame.lines.len() as u16),
            Clear(ClearType::FromCursorDown)
        )?;

        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for CrosstermTerminal<W> {
    fn drop(&mut self) {
        if self.raw_mode.take().is_some() {
            if let Err(e) = self.restore_screen(false) {
                warn!("Failed to restore terminal: {e}");
            }
        }
    }
}
