use crate::error::{CommentError, Result};
use crate::language::Language;
use crate::types::SourceComment;
use tree_sitter::{Node, Parser};

/// Tree-sitter parser producing the comments of a source text
pub struct CommentParser {
    parser: Parser,
    language: Language,
}

impl CommentParser {
    /// Create a new comment parser for a language
    pub fn new(language: Language) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&language.tree_sitter_language())
            .map_err(|e| CommentError::tree_sitter(format!("Failed to set language: {e}")))?;

        Ok(Self { parser, language })
    }

    /// Parse source text and return its comments in source order.
    ///
    /// Fails when the text does not parse cleanly; tree-sitter recovers from
    /// syntax errors, so the tree is rejected as soon as it holds an error node.
    pub fn parse_comments(&mut self, source: &str) -> Result<Vec<SourceComment>> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| CommentError::parse("Failed to parse source code"))?;

        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).unwrap_or(root).start_position();
            return Err(CommentError::Syntax {
                line: at.row + 1,
                column: at.column + 1,
            });
        }

        let mut comments = Vec::new();
        let mut cursor = root.walk();
        'walk: loop {
            let node = cursor.node();
            if self.language.is_comment_kind(node.kind()) {
                comments.push(Self::node_to_comment(source, node));
            } else if cursor.goto_first_child() {
                continue;
            }

            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    break 'walk;
                }
            }
        }

        log::trace!(
            "Found {} {} comments",
            comments.len(),
            self.language.as_str()
        );
        Ok(comments)
    }

    fn node_to_comment(source: &str, node: Node) -> SourceComment {
        let raw = &source[node.start_byte()..node.end_byte()];
        let start = node.start_position();
        let end = node.end_position();

        // Line comments may own their trailing newline
        let end_line = if end.column == 0 && end.row > start.row {
            end.row
        } else {
            end.row + 1
        };

        SourceComment::new(strip_delimiters(raw), start.row + 1, end_line)
    }
}

/// Depth-first search for the first error or missing node
fn first_error(root: Node) -> Option<Node> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Remove comment delimiters, keeping the inner text untouched
fn strip_delimiters(raw: &str) -> &str {
    if let Some(inner) = raw.strip_prefix("/*") {
        let inner = inner.strip_suffix("*/").unwrap_or(inner);
        return inner
            .strip_prefix('*')
            .or_else(|| inner.strip_prefix('!'))
            .unwrap_or(inner);
    }

    let inner = if let Some(rest) = raw.strip_prefix("//") {
        rest.strip_prefix('/')
            .or_else(|| rest.strip_prefix('!'))
            .unwrap_or(rest)
    } else if let Some(rest) = raw.strip_prefix('#') {
        rest
    } else {
        raw
    };
    inner.trim_end_matches(['\n', '\r'])
}
