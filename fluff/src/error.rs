//! Error types and result handling for fixture generation.

use std::fmt;

use crate::config::ConfigError;

/// Error type for every fallible fluff operation
#[derive(Debug, Clone, PartialEq)]
pub enum FluffError {
    /// The caller passed an argument that cannot be sampled from or parsed
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    /// A `FluffConfig` failed validation
    Config(ConfigError),
}

impl fmt::Display for FluffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluffError::InvalidArgument { argument, message } => {
                write!(f, "Invalid argument `{}`: {}", argument, message)
            }
            FluffError::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl std::error::Error for FluffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FluffError::Config(err) => Some(err),
            FluffError::InvalidArgument { .. } => None,
        }
    }
}

impl From<ConfigError> for FluffError {
    fn from(err: ConfigError) -> Self {
        FluffError::Config(err)
    }
}

/// Result alias used throughout the crate
pub type FluffResult<T> = Result<T, FluffError>;

impl FluffError {
    /// Create an invalid argument error for the named parameter
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Shorthand for the empty charset rejection
    pub(crate) fn empty_charset() -> Self {
        Self::invalid_argument("charset", "cannot sample from an empty character set")
    }

    /// Shorthand for the empty enumeration rejection
    pub(crate) fn empty_values() -> Self {
        Self::invalid_argument("values", "cannot pick from an empty enumeration")
    }

    /// Returns true for `InvalidArgument` errors
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FluffError::InvalidArgument { .. })
    }
}
