use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::filter::FilterCharset;
use crate::selector::SelectorConfig;

/// Default number of recently checked-out branches offered
pub const DEFAULT_RECENT_LIMIT: usize = 17;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

impl ColorDefinition {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            rgb: None,
            ansi: None,
            name: Some(name.to_string()),
        }
    }
}

impl Display for ColorDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.rgb, &self.ansi, &self.name) {
            (Some((r, g, b)), _, _) => write!(formatter, "rgb({r}, {g}, {b})"),
            (None, Some(ansi), _) => write!(formatter, "ansi({ansi})"),
            (None, None, Some(name)) => formatter.write_str(name),
            (None, None, None) => formatter.write_str("default"),
        }
    }
}

/// Colours for each part of the selector box. Unset parts use the built-in theme.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeSettings {
    pub border: Option<ColorDefinition>,
    pub title: Option<ColorDefinition>,
    pub label: Option<ColorDefinition>,
    pub filter: Option<ColorDefinition>,
    pub highlight: Option<ColorDefinition>,
    pub no_matches: Option<ColorDefinition>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FilterSettings {
    pub allow_space: bool,
    pub extra_characters: Option<String>,
}

impl FilterSettings {
    #[must_use]
    pub fn charset(&self) -> FilterCharset {
        FilterCharset::default()
            .with_space(self.allow_space)
            .with_extra(self.extra_characters.as_deref().unwrap_or_default())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BranchSettings {
    pub recent_limit: usize,
    /// Answer used when the stash prompt is left blank
    pub stash_by_default: bool,
}

impl Default for BranchSettings {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            stash_by_default: true,
        }
    }
}

/// Contents of the settings YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub title: Option<String>,
    pub min_width: Option<usize>,
    pub filter: FilterSettings,
    pub branches: BranchSettings,
    pub theme: ThemeSettings,
}

impl Settings {
    /// Builds the selector configuration, using `default_title` when no title is set.
    #[must_use]
    pub fn selector_config(&self, default_title: &str) -> SelectorConfig {
        let mut config = SelectorConfig::default()
            .with_title(self.title.as_deref().unwrap_or(default_title))
            .with_charset(self.filter.charset());

        if let Some(min_width) = self.min_width {
            config = config.with_min_width(min_width);
        }

        config
    }
}
