//! Filter/navigate/select state machine.
//!
//! The [`Selector`] owns the option list, the filter text, the filtered view
//! and the cursor. It knows nothing about terminals: keys go in, a [`Step`]
//! comes out, and the caller decides whether to redraw or tear down.

use log::debug;

use crate::error::{Error, Result};
use crate::filter::{matching_indexes, FilterCharset};

/// Columns added to the longest option to get the inner box width
pub const CHROME_PADDING: usize = 14;
/// Narrowest inner box width, regardless of content
pub const DEFAULT_MIN_WIDTH: usize = 60;
/// Title shown when none is configured
pub const DEFAULT_TITLE: &str = "Select an option:";

/// A key press, reduced to what the selector cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Backspace,
    Char(char),
    Interrupt,
    Other,
}

/// The single terminal result of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Selected(String),
    Cancelled,
}

/// What the caller should do after a key was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The key was consumed; redraw.
    Redraw,
    /// The key produced the outcome; stop reading keys.
    Done(Outcome),
    /// An outcome already exists; the key was dropped.
    Closed,
}

/// Selector configuration.
///
/// ```
/// use quickpick_core::filter::FilterCharset;
/// use quickpick_core::selector::SelectorConfig;
///
/// let config = SelectorConfig::default()
///     .with_title("Select a branch:")
///     .with_min_width(40)
///     .with_charset(FilterCharset::default().with_extra("/"))
///     .with_interactive_completion(true);
/// assert_eq!(config.min_width, 40);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorConfig {
    pub title: String,
    pub min_width: usize,
    pub charset: FilterCharset,
    /// The completion prompts the user after the selector is torn down
    pub interactive_completion: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            min_width: DEFAULT_MIN_WIDTH,
            charset: FilterCharset::default(),
            interactive_completion: false,
        }
    }
}

impl SelectorConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    #[must_use]
    pub fn with_charset(mut self, charset: FilterCharset) -> Self {
        self.charset = charset;
        self
    }

    #[must_use]
    pub fn with_interactive_completion(mut self, interactive: bool) -> Self {
        self.interactive_completion = interactive;
        self
    }
}

/// Inner width of the box for `options`.
#[must_use]
pub fn box_width(options: &[String], min_width: usize) -> usize {
    let longest = options
        .iter()
        .map(|option| option.chars().count())
        .max()
        .unwrap_or(0);

    (longest + CHROME_PADDING).max(min_width)
}

#[derive(Debug)]
pub struct Selector {
    options: Vec<String>,
    filter: String,
    view: Vec<usize>,
    cursor: usize,
    outcome: Option<Outcome>,
    width: usize,
    config: SelectorConfig,
}

impl Selector {
    /// Creates a selector over `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `options` is empty.
    pub fn new(options: Vec<String>, config: SelectorConfig) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::EmptyInput);
        }

        let width = box_width(&options, config.min_width);
        let view = (0..options.len()).collect();
        debug!("Selector created with {} options, width {}", options.len(), width);

        Ok(Self {
            options,
            filter: String::new(),
            view,
            cursor: 0,
            outcome: None,
            width,
            config,
        })
    }

    /// Applies one key.
    pub fn handle_key(&mut self, key: Key) -> Step {
        if self.outcome.is_some() {
            return Step::Closed;
        }

        match key {
            Key::Up => {
                let n = self.view.len();
                if n > 0 {
                    self.cursor = (self.cursor + n - 1) % n;
                }
            }
            Key::Down => {
                let n = self.view.len();
                if n > 0 {
                    self.cursor = (self.cursor + 1) % n;
                }
            }
            Key::Enter => {
                if let Some(selected) = self.selected() {
                    let outcome = Outcome::Selected(selected.to_string());
                    return self.finish(outcome);
                }
            }
            Key::Interrupt => return self.finish(Outcome::Cancelled),
            Key::Backspace => {
                if self.filter.pop().is_some() {
                    self.refilter();
                }
            }
            Key::Char(c) if self.config.charset.allows(c) => {
                self.filter.push(c);
                self.refilter();
            }
            Key::Char(_) | Key::Other => {}
        }

        Step::Redraw
    }

    fn finish(&mut self, outcome: Outcome) -> Step {
        debug!("Session outcome: {:?}", outcome);
        self.outcome = Some(outcome.clone());
        Step::Done(outcome)
    }

    // Always derived from the full list, never from the previous view.
    fn refilter(&mut self) {
        self.view = matching_indexes(&self.options, &self.filter);
        self.cursor = 0;
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The filtered view, in original order.
    pub fn view(&self) -> impl Iterator<Item = &str> + '_ {
        self.view.iter().map(|&i| self.options[i].as_str())
    }

    #[must_use]
    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Cursor into the filtered view; `None` when the view is empty.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        (self.cursor < self.view.len()).then_some(self.cursor)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.cursor()
            .map(|cursor| self.options[self.view[cursor]].as_str())
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }
}
