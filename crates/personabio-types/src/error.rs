use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building an interview script from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("interview script has no questions")]
    NoQuestions,

    #[error("question {0} is blank")]
    BlankQuestion(usize),

    #[error("draft template needs {expected} slot labels, got {actual}")]
    LabelCount { expected: usize, actual: usize },
}

/// Errors related to reading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_error_display() {
        let err = ScriptError::LabelCount {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "draft template needs 4 slot labels, got 3");
        assert_eq!(ScriptError::BlankQuestion(2).to_string(), "question 2 is blank");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            path: PathBuf::from("/tmp/config.toml"),
            message: "expected `=`".to_string(),
        };
        assert!(err.to_string().contains("/tmp/config.toml"));
        assert!(err.to_string().contains("expected `=`"));
    }
}
