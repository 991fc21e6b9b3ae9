use thiserror::Error;

#[derive(Error, Debug)]
pub enum AngleError {
    #[error("Angle overflow: {reason}")]
    AngleOverflow { reason: String },

    #[error("{input} does not match an angle measure.")]
    NoMatch { input: String },

    #[error("Angle parser failure: {diagnostic}")]
    RegexFailure { diagnostic: String },

    #[error("{method}: argument #{position} must be one of {}, {received} given", .accepted.join(", "))]
    InvalidArgument {
        method: &'static str,
        position: usize,
        accepted: &'static [&'static str],
        received: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Range,
    Parse,
    Argument,
    Configuration,
    System,
}

impl AngleError {
    pub fn overflow(reason: impl Into<String>) -> Self {
        AngleError::AngleOverflow {
            reason: reason.into(),
        }
    }

    pub fn no_match(input: impl Into<String>) -> Self {
        AngleError::NoMatch {
            input: input.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AngleError::AngleOverflow { .. } => ErrorCategory::Range,
            AngleError::NoMatch { .. } | AngleError::RegexFailure { .. } => ErrorCategory::Parse,
            AngleError::InvalidArgument { .. } => ErrorCategory::Argument,
            AngleError::ConfigError { .. } | AngleError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AngleError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AngleError::AngleOverflow { reason } => {
                format!("The angle is out of range: {}", reason)
            }
            AngleError::NoMatch { input } => format!(
                "'{}' is not an angle. Use the form -12° 30' 15.5\" or a decimal number.",
                input
            ),
            AngleError::RegexFailure { .. } => {
                "The angle parser failed on a matched value.".to_string()
            }
            AngleError::InvalidArgument { .. } => self.to_string(),
            AngleError::ConfigError { field, .. }
            | AngleError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting in your configuration file.", field)
            }
            AngleError::IoError(e) => format!("File access failed: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, AngleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_message_names_input() {
        let err = AngleError::no_match("abc");
        assert_eq!(err.to_string(), "abc does not match an angle measure.");
        assert_eq!(err.category(), ErrorCategory::Parse);
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = AngleError::InvalidArgument {
            method: "Angle::is_equal",
            position: 1,
            accepted: &["int", "float", "string", "Angle"],
            received: "bool".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Angle::is_equal: argument #1 must be one of int, float, string, Angle, bool given"
        );
        assert_eq!(err.category(), ErrorCategory::Argument);
    }

    #[test]
    fn test_overflow_category() {
        let err = AngleError::overflow("The angle can't be greater than 360°.");
        assert_eq!(err.category(), ErrorCategory::Range);
        assert!(err.user_friendly_message().contains("360°"));
    }
}
