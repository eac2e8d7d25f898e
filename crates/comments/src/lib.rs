//! # Architecture Notes Comments
//!
//! Tree-sitter backed comment extraction for the architecture notes pipeline.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     │
//!     ├──> Language Detection (from extension)
//!     │
//!     ├──> Tree-sitter Parsing → AST
//!     │      └─> Reject trees containing syntax errors
//!     │
//!     └──> Comment Walk (source order)
//!          ├─> Strip comment delimiters
//!          └─> Emit SourceComment[] with 1-based line ranges
//! ```
//!
//! ## Example
//!
//! ```rust
//! use archnotes_comments::{CommentParser, Language};
//!
//! let mut parser = CommentParser::new(Language::JavaScript).unwrap();
//! let comments = parser
//!     .parse_comments("// hello\nconst a = 1;\n")
//!     .unwrap();
//!
//! assert_eq!(comments[0].text, " hello");
//! assert_eq!(comments[0].start_line, 1);
//! ```

mod error;
mod language;
mod parser;
mod types;

pub use error::{CommentError, Result};
pub use language::Language;
pub use parser::CommentParser;
pub use types::SourceComment;
