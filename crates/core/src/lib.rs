//! # Architecture Notes Core
//!
//! Extracts `Architecture Note #<id>: <title>` comments from source files,
//! orders them by their dotted id and renders one linked markdown document.
//!
//! ## Pipeline
//!
//! ```text
//! Patterns
//!     │
//!     ├──> FileSystem (glob + ignore set)
//!     │      └─> Absolute file paths
//!     │
//!     ├──> Collector (concurrent reads, fail fast)
//!     │      └─> extract_notes per file
//!     │            ├─> Shebang neutralization
//!     │            ├─> CommentParser (tree-sitter)
//!     │            └─> parse_note on each comment
//!     │
//!     ├──> sort_notes (stable, hierarchical)
//!     │
//!     └──> MarkdownRenderer
//!            └─> Headings, bodies, context links
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use archnotes_core::{ArchitectureNotes, LocalFileSystem, RenderOptions};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> archnotes_core::Result<()> {
//!     let pipeline = ArchitectureNotes::new(LocalFileSystem, RenderOptions::default())?;
//!     let markdown = pipeline
//!         .build(Path::new("/path/to/project"), &["src/**/*.js".to_string()], &[])
//!         .await?;
//!
//!     print!("{markdown}");
//!     Ok(())
//! }
//! ```

mod collect;
mod config;
mod error;
mod extract;
mod fs;
mod marker;
mod note;
mod order;
mod pipeline;
mod render;

pub use collect::Collector;
pub use config::{ProjectConfig, RenderOptions, CONFIG_FILE_NAME, NATIVE_EOL};
pub use error::{ArchNotesError, Result};
pub use extract::{extract_notes, notes_from_comments};
pub use fs::{FileSystem, LocalFileSystem};
pub use marker::parse_note;
pub use note::{Note, NoteFragment, NoteId, ParseNoteIdError, SourceRange, MAX_ID_DEPTH};
pub use order::{compare_ids, compare_notes, sort_notes};
pub use pipeline::ArchitectureNotes;
pub use render::MarkdownRenderer;
