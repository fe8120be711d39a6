//! Settings file loading and validation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::settings::{ColorDefinition, Settings};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(file_description.to_string(), path.to_string(), e)),
    }
}

/// Reads the settings file.
///
/// A missing file is not an error: the defaults are returned instead.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - A setting has an invalid value
pub fn get_settings(settings_path: &str) -> Result<Settings> {
    if !Path::exists(Path::new(settings_path)) {
        debug!("No settings file at `{settings_path}`, using defaults");
        return Ok(Settings::default());
    }

    let mut reader = get_reader("settings", settings_path)?;
    let mut content = String::new();
    if let Err(e) = reader.read_to_string(&mut content) {
        return Err(Error::io_error("settings".to_string(), settings_path.to_string(), e));
    }

    if is_blank(&content) {
        return Ok(Settings::default());
    }

    let settings: Settings = match serde_yaml::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            return Err(Error::yaml_error(
                "reading".to_string(),
                "settings".to_string(),
                settings_path.to_string(),
                e,
            ))
        }
    };

    validate_settings(&settings)?;
    Ok(settings)
}

// Nothing but comments and whitespace
fn is_blank(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn validate_color(setting: &str, color: Option<&ColorDefinition>) -> Result<()> {
    let Some(color) = color else {
        return Ok(());
    };

    let defined_count = [color.rgb.is_some(), color.ansi.is_some(), color.name.is_some()]
        .iter()
        .filter(|&&x| x)
        .count();

    if defined_count > 1 {
        return Err(Error::MultipleColorTypes);
    }

    if defined_count == 0 {
        return Err(Error::InvalidSetting(
            setting.to_string(),
            "one of `rgb`, `ansi` or `name` is required".to_string(),
        ));
    }

    Ok(())
}

fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.branches.recent_limit == 0 {
        return Err(Error::InvalidSetting(
            "branches.recent_limit".to_string(),
            "must be at least 1".to_string(),
        ));
    }

    if let Some(extra) = &settings.filter.extra_characters {
        if let Some(c) = extra.chars().find(|c| c.is_control()) {
            return Err(Error::InvalidSetting(
                "filter.extra_characters".to_string(),
                format!("control character {c:?} is not allowed"),
            ));
        }
    }

    let theme = &settings.theme;
    validate_color("theme.border", theme.border.as_ref())?;
    validate_color("theme.title", theme.title.as_ref())?;
    validate_color("theme.label", theme.label.as_ref())?;
    validate_color("theme.filter", theme.filter.as_ref())?;
    validate_color("theme.highlight", theme.highlight.as_ref())?;
    validate_color("theme.no_matches", theme.no_matches.as_ref())?;

    Ok(())
}
