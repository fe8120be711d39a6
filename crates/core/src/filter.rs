//! Filter text rules.
//!
//! Decides which typed characters may enter the filter and which options
//! survive a given filter.

/// Characters that may be appended to the filter text.
///
/// ASCII letters, digits, `-` and `_` are always accepted. Space and any
/// extra characters are opt-in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCharset {
    pub allow_space: bool,
    pub extra: Vec<char>,
}

impl FilterCharset {
    #[must_use]
    pub fn with_space(mut self, allow_space: bool) -> Self {
        self.allow_space = allow_space;
        self
    }

    #[must_use]
    pub fn with_extra(mut self, extra: &str) -> Self {
        self.extra = extra.chars().filter(|c| !c.is_control()).collect();
        self
    }

    /// Whether `c` may be appended to the filter text.
    #[must_use]
    pub fn allows(&self, c: char) -> bool {
        if c.is_control() {
            return false;
        }

        c.is_ascii_alphanumeric()
            || c == '-'
            || c == '_'
            || (self.allow_space && c == ' ')
            || self.extra.contains(&c)
    }
}

/// Case-insensitive substring match.
#[must_use]
pub fn matches(option: &str, filter: &str) -> bool {
    filter.is_empty() || option.to_lowercase().contains(&filter.to_lowercase())
}

/// Indexes into `options` that match `filter`, in original order.
#[must_use]
pub fn matching_indexes(options: &[String], filter: &str) -> Vec<usize> {
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| matches(option, filter))
        .map(|(i, _)| i)
        .collect()
}
