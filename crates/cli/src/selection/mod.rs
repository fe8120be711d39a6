//! Interactive selection on the terminal.
//!
//! This module provides the terminal side of quickpick: the crossterm
//! backend that draws selector frames and reads keys, the colour theme, and
//! the prompts shown after a branch is picked.
//!
//! # User Interface
//!
//! The interface supports:
//! - Typing letters, digits, `-` and `_` to filter (space and extra
//!   characters when configured)
//! - Backspace to remove the last filter character
//! - Up/Down arrows to move the selection, wrapping at both ends
//! - Enter to confirm the highlighted option
//! - Ctrl-C to cancel

pub mod colors;
pub mod input;
pub mod keys;
pub mod ui;

// Re-exports for convenience
pub use colors::Theme;
pub use input::TerminalPrompt;
pub use ui::{install_panic_hook, restore_terminal, CrosstermTerminal};
