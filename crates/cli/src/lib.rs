//! Quickpick CLI Library
//!
//! This crate provides the command-line interface for quickpick: argument
//! parsing, the crossterm terminal backend, colour theming, interrupt
//! handling and the prompts shown around a branch switch.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and settings overrides
//! - [`selection`]: Terminal drawing, key reading and prompts
//! - [`interrupt`]: SIGINT handling while a session owns the terminal
//! - [`exit_status`]: Exit status of a finished command
//!
//! # Examples
//!
//! The CLI binary (`qp`) can be used in several ways:
//!
//! ```bash
//! # Pick one of the given options, printed on stdout
//! qp pick main develop feature/login
//!
//! # Switch to a recently checked-out git branch
//! qp switch
//!
//! # Allow `/` in the filter and never ask before stashing
//! qp switch --extra-chars / --no-stash-prompt
//! ```

pub mod cli_args;
pub mod exit_status;
pub mod interrupt;
pub mod selection;
