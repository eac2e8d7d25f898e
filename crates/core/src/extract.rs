use crate::error::{ArchNotesError, Result};
use crate::marker::parse_note;
use crate::note::{Note, SourceRange};
use archnotes_comments::{CommentParser, Language, SourceComment};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::path::Path;

/// Interpreter line such as `#! /usr/bin/env node`
static SHEBANG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#![ \t]*/").expect("shebang pattern must compile"));

/// Extract the notes of one file, in the order they appear in it
pub fn extract_notes(path: &Path, source: &str) -> Result<Vec<Note>> {
    let language = Language::from_path(path);
    let source = neutralize_shebang(source, language);

    let comments = CommentParser::new(language)
        .and_then(|mut parser| parser.parse_comments(&source))
        .map_err(|source| ArchNotesError::FileParseFailure {
            path: path.to_path_buf(),
            source,
        })?;

    let notes = notes_from_comments(path, &comments);
    log::debug!(
        "{}: {} comments, {} notes",
        path.display(),
        comments.len(),
        notes.len()
    );
    Ok(notes)
}

/// Build notes from already parsed comments, skipping non-note comments
pub fn notes_from_comments(path: &Path, comments: &[SourceComment]) -> Vec<Note> {
    comments
        .iter()
        .filter_map(|comment| {
            let fragment = parse_note(&comment.text)?;
            Some(Note::new(
                fragment,
                path.to_path_buf(),
                SourceRange {
                    start_line: comment.start_line,
                    end_line: comment.end_line,
                },
            ))
        })
        .collect()
}

/// Turn a leading shebang into a line comment so the grammar accepts it.
/// Line numbers are unchanged.
fn neutralize_shebang(source: &str, language: Language) -> Cow<'_, str> {
    match language.line_comment_prefix() {
        Some(prefix) if SHEBANG.is_match(source) => Cow::Owned(format!("{prefix}{source}")),
        _ => Cow::Borrowed(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shebang_is_commented_out_for_c_like_languages() {
        let src = "#! /usr/bin/env node\nconsole.log(1);\n";
        assert_eq!(
            neutralize_shebang(src, Language::JavaScript),
            "//#! /usr/bin/env node\nconsole.log(1);\n"
        );
        assert_eq!(neutralize_shebang(src, Language::Python), src);
    }

    #[test]
    fn inner_attributes_are_not_shebangs() {
        let src = "#![allow(dead_code)]\nfn main() {}\n";
        assert!(matches!(
            neutralize_shebang(src, Language::Rust),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn only_matching_comments_become_notes() {
        let comments = vec![
            SourceComment::new(" eslint-disable", 1, 1),
            SourceComment::new(" Architecture Note #2: Second\n\nWhy.\n", 3, 6),
            SourceComment::new(" Architecture Note #1: First", 8, 8),
        ];

        let notes = notes_from_comments(Path::new("/repo/a.js"), &comments);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id().to_string(), "2");
        assert_eq!(notes[0].body(), "Why.");
        assert_eq!(
            notes[0].source_range(),
            SourceRange {
                start_line: 3,
                end_line: 6
            }
        );
        assert_eq!(notes[1].title(), "First");
        assert_eq!(notes[1].source_path(), Path::new("/repo/a.js"));
    }
}
