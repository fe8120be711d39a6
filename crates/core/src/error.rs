use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("There is nothing to select from.")]
    EmptyInput,

    #[error("Error querying `{}`: {}", .command, .reason)]
    QueryFailure { command: String, reason: String },

    #[error("Failed to {}.", .action)]
    ActionFailure { action: String },

    #[error("Branch switch canceled due to uncommitted changes.")]
    StashDeclined,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("Invalid setting `{}`: {}", .0, .1)]
    InvalidSetting(String, String),
}

impl Error {
    pub fn query_failure(command: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::QueryFailure {
            command: command.into(),
            reason: reason.to_string(),
        }
    }

    pub fn action_failure(action: impl Into<String>) -> Self {
        Self::ActionFailure {
            action: action.into(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
