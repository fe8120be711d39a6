use crossterm::style::Color;
use quickpick_core::error::{Error, Result};
use quickpick_core::frame::SegmentKind;
use quickpick_core::settings::{ColorDefinition, ThemeSettings};

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        // Error if more than one field is defined
        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "darkgrey" | "gray" | "grey" => Color::DarkGrey,
                "red" => Color::Red,
                "darkred" => Color::DarkRed,
                "green" => Color::Green,
                "darkgreen" => Color::DarkGreen,
                "yellow" => Color::Yellow,
                "darkyellow" => Color::DarkYellow,
                "blue" => Color::Blue,
                "darkblue" => Color::DarkBlue,
                "magenta" => Color::Magenta,
                "darkmagenta" => Color::DarkMagenta,
                "cyan" => Color::Cyan,
                "darkcyan" => Color::DarkCyan,
                "white" => Color::White,
                "lightgrey" => Color::Grey,
                _ => return Err(Error::UnknownColorName(name.to_string())),
            }),
            (None, None, None) => None,
            _ => unreachable!(), // This case is prevented by the earlier check
        })
    }
}

/// Foreground colour and weight for one kind of segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentStyle {
    pub foreground: Color,
    pub bold: bool,
}

impl SegmentStyle {
    const fn plain(foreground: Color) -> Self {
        Self {
            foreground,
            bold: false,
        }
    }

    const fn bold(foreground: Color) -> Self {
        Self {
            foreground,
            bold: true,
        }
    }
}

/// Colours for the selector box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub border: SegmentStyle,
    pub title: SegmentStyle,
    pub label: SegmentStyle,
    pub filter: SegmentStyle,
    pub item: SegmentStyle,
    pub highlight: SegmentStyle,
    pub no_matches: SegmentStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: SegmentStyle::plain(Color::Cyan),
            title: SegmentStyle::bold(Color::White),
            label: SegmentStyle::plain(Color::DarkGrey),
            filter: SegmentStyle::plain(Color::White),
            item: SegmentStyle::plain(Color::Reset),
            highlight: SegmentStyle::bold(Color::Green),
            no_matches: SegmentStyle::plain(Color::Red),
        }
    }
}

fn override_color(
    style: &mut SegmentStyle,
    color_definition: Option<&ColorDefinition>,
) -> Result<()> {
    if let Some(color_definition) = color_definition {
        if let Some(color) = color_definition.as_crossterm_color()? {
            style.foreground = color;
        }
    }
    Ok(())
}

impl Theme {
    /// The default theme with the colours from `settings` applied on top.
    ///
    /// # Errors
    ///
    /// Returns an error if a colour definition is invalid.
    pub fn from_settings(settings: &ThemeSettings) -> Result<Self> {
        let mut theme = Self::default();
        override_color(&mut theme.border, settings.border.as_ref())?;
        override_color(&mut theme.title, settings.title.as_ref())?;
        override_color(&mut theme.label, settings.label.as_ref())?;
        override_color(&mut theme.filter, settings.filter.as_ref())?;
        override_color(&mut theme.highlight, settings.highlight.as_ref())?;
        override_color(&mut theme.no_matches, settings.no_matches.as_ref())?;
        Ok(theme)
    }

    #[must_use]
    pub fn style_for(&self, kind: SegmentKind) -> SegmentStyle {
        match kind {
            SegmentKind::Border => self.border,
            SegmentKind::Title => self.title,
            SegmentKind::FilterLabel => self.label,
            SegmentKind::FilterText => self.filter,
            SegmentKind::Item => self.item,
            SegmentKind::SelectedItem => self.highlight,
            SegmentKind::NoMatches => self.no_matches,
        }
    }
}
