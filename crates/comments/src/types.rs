use serde::{Deserialize, Serialize};

/// A comment found in source text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceComment {
    /// Comment content without its delimiters
    pub text: String,

    /// Start line (1-indexed)
    pub start_line: usize,

    /// End line (1-indexed, inclusive)
    pub end_line: usize,
}

impl SourceComment {
    /// Create a new source comment
    #[must_use]
    pub fn new(text: impl Into<String>, start_line: usize, end_line: usize) -> Self {
        Self {
            text: text.into(),
            start_line,
            end_line,
        }
    }
}
