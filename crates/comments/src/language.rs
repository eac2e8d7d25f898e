use std::path::Path;

/// Host language of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Tsx,
    Rust,
    Python,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "ts" | "mts" | "cts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            "rs" => Some(Language::Rust),
            "py" | "pyw" => Some(Language::Python),
            _ => None,
        }
    }

    /// Detect language from file path, falling back to JavaScript
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(Language::JavaScript)
    }

    /// Get language name as string
    pub fn as_str(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Rust => "rust",
            Language::Python => "python",
        }
    }

    /// Get Tree-sitter language instance
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Language::Rust => tree_sitter_rust::LANGUAGE.into(),
            Language::Python => tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Whether a node kind of this grammar is a comment
    pub fn is_comment_kind(self, kind: &str) -> bool {
        match self {
            Language::JavaScript | Language::TypeScript | Language::Tsx | Language::Python => {
                kind == "comment"
            }
            Language::Rust => matches!(kind, "line_comment" | "block_comment"),
        }
    }

    /// Prefix turning a line into a comment, when the language needs one
    /// for a shebang line. Python already reads `#!` as a comment.
    pub fn line_comment_prefix(self) -> Option<&'static str> {
        match self {
            Language::JavaScript | Language::TypeScript | Language::Tsx | Language::Rust => {
                Some("//")
            }
            Language::Python => None,
        }
    }
}
