use thiserror::Error;

/// Result type for comment extraction
pub type Result<T> = std::result::Result<T, CommentError>;

/// Errors that can occur while turning source text into comments
#[derive(Error, Debug)]
pub enum CommentError {
    /// The source text is not valid syntax for its language
    #[error("Syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    /// Tree-sitter produced no tree at all
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Tree-sitter error
    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),
}

impl CommentError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a tree-sitter error
    pub fn tree_sitter(msg: impl Into<String>) -> Self {
        Self::TreeSitterError(msg.into())
    }
}
