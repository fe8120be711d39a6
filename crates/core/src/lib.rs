//! Quickpick Core Library
//!
//! This crate provides the core functionality for quickpick, an interactive
//! terminal picker: a list of options is narrowed by typing a filter, walked
//! with the arrow keys and confirmed with Enter.
//!
//! # Key Features
//!
//! - **Selector State Machine**: Filter text, filtered view, wrapping cursor and a single outcome
//! - **Frame Layout**: A bordered box rebuilt from state on every redraw
//! - **Sessions**: Attach/detach lifecycle over any [`terminal::Terminal`]
//! - **Branch Switching**: Recent branches from the reflog, stash-and-switch on selection
//! - **Settings**: Optional YAML settings file
//!
//! # Examples
//!
//! Driving the selector directly:
//!
//! ```
//! use quickpick_core::selector::{Key, Outcome, Selector, SelectorConfig, Step};
//!
//! let options = vec!["main".to_string(), "feature/a".to_string(), "feature/b".to_string()];
//! let mut selector = Selector::new(options, SelectorConfig::default())?;
//!
//! for c in "fea".chars() {
//!     selector.handle_key(Key::Char(c));
//! }
//! selector.handle_key(Key::Down);
//!
//! assert_eq!(
//!     selector.handle_key(Key::Enter),
//!     Step::Done(Outcome::Selected("feature/b".to_string()))
//! );
//! # Ok::<(), quickpick_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod filter;
pub mod frame;
pub mod git;
pub mod selector;
pub mod session;
pub mod settings;
pub mod switch;
pub mod terminal;
