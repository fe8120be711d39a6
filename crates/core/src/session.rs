//! Interactive selection session.
//!
//! A [`Session`] binds a [`Selector`] to a [`Terminal`] for the duration of
//! one blocking run and hands back exactly one [`Outcome`].

use log::{debug, warn};

use crate::error::Result;
use crate::frame::{Frame, Viewport};
use crate::selector::{Outcome, Selector, SelectorConfig, Step};
use crate::terminal::Terminal;

pub struct Session<T: Terminal> {
    selector: Selector,
    terminal: T,
    viewport: Viewport,
    attached: bool,
}

impl<T: Terminal> Session<T> {
    /// Creates a session over `options`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::EmptyInput`] if `options` is empty.
    pub fn new(options: Vec<String>, config: SelectorConfig, terminal: T) -> Result<Self> {
        Ok(Self {
            selector: Selector::new(options, config)?,
            terminal,
            viewport: Viewport::default(),
            attached: false,
        })
    }

    /// Takes ownership of the terminal input.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot enter capture mode.
    pub fn attach(&mut self) -> Result<()> {
        if !self.attached {
            self.terminal.attach()?;
            self.attached = true;
            debug!("Session attached");
        }
        Ok(())
    }

    /// Gives the terminal back.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal mode cannot be restored.
    pub fn detach(&mut self) -> Result<()> {
        if self.attached {
            self.attached = false;
            self.terminal
                .detach(self.selector.config().interactive_completion)?;
            debug!("Session detached");
        }
        Ok(())
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Draws the current state. Does nothing once the outcome is fixed.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn redraw(&mut self) -> Result<()> {
        if self.selector.is_done() {
            return Ok(());
        }

        self.viewport.resize(self.terminal.rows()?);
        self.viewport
            .follow(self.selector.cursor(), self.selector.view_len());

        let frame = Frame::build(&self.selector, &self.viewport);
        self.terminal.draw(&frame)
    }

    /// Runs the session until a selection is confirmed or it is cancelled.
    ///
    /// The terminal is detached on every path out of this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails; the terminal is still detached.
    pub fn run(&mut self) -> Result<Outcome> {
        let result = self.attach().and_then(|()| self.event_loop());

        match self.detach() {
            Ok(()) => result,
            Err(detach_error) => match result {
                Ok(_) => Err(detach_error),
                Err(e) => {
                    warn!("Failed to restore terminal: {detach_error}");
                    Err(e)
                }
            },
        }
    }

    fn event_loop(&mut self) -> Result<Outcome> {
        self.redraw()?;

        loop {
            let key = self.terminal.next_key()?;
            match self.selector.handle_key(key) {
                Step::Redraw => self.redraw()?,
                Step::Done(outcome) => return Ok(outcome),
                Step::Closed => {
                    if let Some(outcome) = self.selector.outcome() {
                        return Ok(outcome.clone());
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    #[must_use]
    pub fn terminal(&self) -> &T {
        &self.terminal
    }
}

impl<T: Terminal> Drop for Session<T> {
    fn drop(&mut self) {
        if let Err(e) = self.detach() {
            warn!("Failed to restore terminal: {e}");
        }
    }
}
