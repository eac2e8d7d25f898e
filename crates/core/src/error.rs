use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArchNotesError>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ArchNotesError {
    #[error("Could not resolve pattern `{pattern}`: {source}")]
    PatternFailure {
        pattern: String,
        #[source]
        source: BoxError,
    },

    #[error("Could not read `{}`: {source}", path.display())]
    FileFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse `{}`: {source}", path.display())]
    FileParseFailure {
        path: PathBuf,
        #[source]
        source: archnotes_comments::CommentError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ArchNotesError {
    pub fn pattern(pattern: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::PatternFailure {
            pattern: pattern.into(),
            source: source.into(),
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Stable discriminator for callers that branch on the failure kind
    pub const fn code(&self) -> &'static str {
        match self {
            Self::PatternFailure { .. } => "E_PATTERN_FAILURE",
            Self::FileFailure { .. } => "E_FILE_FAILURE",
            Self::FileParseFailure { .. } => "E_FILE_PARSE_FAILURE",
            Self::InvalidConfig(_) => "E_BAD_CONFIG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        let err = ArchNotesError::pattern("src/[", "bad glob");
        assert_eq!(err.code(), "E_PATTERN_FAILURE");
        assert!(err.to_string().contains("src/["));

        let err = ArchNotesError::FileFailure {
            path: PathBuf::from("/repo/a.js"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.code(), "E_FILE_FAILURE");
        assert!(err.to_string().contains("/repo/a.js"));

        assert_eq!(
            ArchNotesError::invalid_config("eol").code(),
            "E_BAD_CONFIG"
        );
    }
}
