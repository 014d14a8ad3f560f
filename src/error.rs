//! Error types with fix suggestions

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DevmindError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum DevmindError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {reason}")]
    Terminal { reason: String },

    #[error("TUI feature disabled: {reason}")]
    FeatureDisabled { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FixSuggestion for DevmindError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            DevmindError::Io(_) => Some("Check terminal permissions and try again"),
            DevmindError::Terminal { .. } => {
                Some("Run devmind from an interactive terminal (TTY)")
            }
            DevmindError::FeatureDisabled { .. } => {
                Some("Rebuild with the default feature set: cargo build --features tui")
            }
            DevmindError::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_error_display() {
        let err = DevmindError::Terminal {
            reason: "no tty".to_string(),
        };
        assert_eq!(format!("{}", err), "Terminal error: no tty");
    }

    #[test]
    fn test_fix_suggestions_present() {
        let err = DevmindError::FeatureDisabled {
            reason: "built without tui".to_string(),
        };
        assert!(err.fix_suggestion().unwrap().contains("--features tui"));
    }
}
