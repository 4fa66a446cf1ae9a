use thiserror::Error;

/// Errors that can occur during gamerls core operations.
///
/// The parse entry points are total and never return these; they surface
/// only while building pattern tables or converting strings strictly.
#[derive(Debug, Error)]
pub enum GamerlsError {
    /// The input string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// A string could not be read as a game version.
    #[error("invalid game version: {input:?}")]
    InvalidVersion {
        /// The rejected input.
        input: String,
    },

    /// A quality name did not match any known quality.
    #[error("unknown quality name: {name:?}")]
    UnknownQuality {
        /// The rejected name.
        name: String,
    },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// A look-around pattern failed to compile (should not happen with static patterns).
    #[error("pattern compilation error: {0}")]
    PatternError(#[from] fancy_regex::Error),
}

/// Result type alias for gamerls operations.
pub type Result<T> = std::result::Result<T, GamerlsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = GamerlsError::EmptyInput;
        assert_eq!(err.to_string(), "input is empty or whitespace-only");

        let err = GamerlsError::InvalidVersion {
            input: "version one".into(),
        };
        assert!(err.to_string().contains("version one"));

        let err = GamerlsError::UnknownQuality {
            name: "Blu".into(),
        };
        assert!(err.to_string().contains("Blu"));
    }

    #[test]
    fn regex_errors_convert() {
        let err: GamerlsError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, GamerlsError::RegexError(_)));

        let err: GamerlsError = fancy_regex::Regex::new("(?<=a+)b").unwrap_err().into();
        assert!(matches!(err, GamerlsError::PatternError(_)));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GamerlsError>();
    }
}
