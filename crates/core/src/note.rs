use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Deepest outline level a note id may have
pub const MAX_ID_DEPTH: usize = 8;

/// Dotted hierarchical position of a note, e.g. `1.3.2`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteId(Vec<u64>);

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid note id `{0}`")]
pub struct ParseNoteIdError(String);

impl NoteId {
    pub fn components(&self) -> &[u64] {
        &self.0
    }

    /// Number of outline levels (always at least one)
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .split('.')
            .map(|group| {
                if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                group.parse::<u64>().ok()
            })
            .collect::<Option<Vec<_>>>()
            .filter(|components| components.len() <= MAX_ID_DEPTH)
            .ok_or_else(|| ParseNoteIdError(s.to_string()))?;

        Ok(Self(components))
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

impl Serialize for NoteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Ord for NoteId {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::order::compare_ids(&self.0, &other.0)
    }
}

impl PartialOrd for NoteId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lines a note's comment occupies (1-indexed, inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceRange {
    pub start_line: usize,
    pub end_line: usize,
}

/// What the marker grammar yields from a single comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFragment {
    pub id: NoteId,
    pub title: String,
    pub body: String,
}

/// An architecture note located in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    title: String,
    body: String,
    source_path: PathBuf,
    source_range: SourceRange,
}

impl Note {
    #[must_use]
    pub fn new(fragment: NoteFragment, source_path: PathBuf, source_range: SourceRange) -> Self {
        Self {
            id: fragment.id,
            title: fragment.title,
            body: fragment.body,
            source_path,
            source_range,
        }
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn source_range(&self) -> SourceRange {
        self.source_range
    }
}
