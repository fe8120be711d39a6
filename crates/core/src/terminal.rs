use crate::error::Result;
use crate::frame::Frame;
use crate::selector::Key;

/// The terminal a session runs on.
///
/// Implementations own the device exclusively between [`Terminal::attach`]
/// and [`Terminal::detach`]. Both calls must be safe to repeat.
pub trait Terminal {
    /// Captures input and prepares the screen.
    fn attach(&mut self) -> Result<()>;

    /// Releases input capture and restores the normal terminal mode.
    ///
    /// When `clear` is set the screen is left blank for whatever prompts next.
    fn detach(&mut self, clear: bool) -> Result<()>;

    /// Blocks until the next key.
    fn next_key(&mut self) -> Result<Key>;

    /// Rows available for drawing, if known.
    fn rows(&self) -> Result<Option<usize>>;

    /// Replaces the screen contents with `frame`.
    fn draw(&mut self, frame: &Frame) -> Result<()>;
}
