//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate, and how flags override the settings file.

use clap::{Parser, Subcommand};
use quickpick_core::settings::Settings;

/// Command-line arguments for the quickpick CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use quickpick_cli::cli_args::{Args, Commands};
///
/// let args = Args::parse_from(["qp", "pick", "main", "dev"]);
/// assert!(matches!(args.command, Commands::Pick { .. }));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "qp", version, about = "Pick one option from a filterable list")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings YAML.
    ///
    /// If not provided, defaults to `~/.quickpick/config.yml`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    /// Title shown at the top of the box.
    #[arg(long, global = true)]
    pub title: Option<String>,

    /// Minimum inner width of the box.
    #[arg(long, global = true)]
    pub min_width: Option<usize>,

    /// Allow spaces in the filter text.
    #[arg(long, global = true, action)]
    pub allow_space: bool,

    /// Extra characters allowed in the filter text, e.g. `/.`
    #[arg(long, global = true)]
    pub extra_chars: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick one of the given options and print it to stdout.
    Pick {
        /// The options to choose from, in display order.
        options: Vec<String>,
    },

    /// Pick a recently used git branch and switch to it.
    #[command(alias = "branch")]
    Switch {
        /// Do not ask before stashing; use the configured default answer.
        #[arg(long, action)]
        no_stash_prompt: bool,
    },
}

impl Args {
    /// Applies command-line overrides on top of the settings file.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(title) = &self.title {
            settings.title = Some(title.clone());
        }

        if let Some(min_width) = self.min_width {
            settings.min_width = Some(min_width);
        }

        if self.allow_space {
            settings.filter.allow_space = true;
        }

        if let Some(extra_chars) = &self.extra_chars {
            settings.filter.extra_characters = Some(extra_chars.clone());
        }
    }
}
