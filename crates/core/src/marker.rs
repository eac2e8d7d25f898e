//! Recognition of the `Architecture Note #<id>: <title>` marker.

use crate::note::{NoteFragment, NoteId};
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker line: the id allows one to eight dot-separated groups and the
/// title runs to the end of the line.
static MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*Architecture Note #([0-9]+(?:\.[0-9]+){0,7}):[^\S\r\n]+([^\r\n]*)")
        .expect("marker pattern must compile")
});

/// Parse a comment's text into a note fragment.
///
/// Returns `None` for comments that do not start with the marker, which is
/// the common case and not an error.
pub fn parse_note(comment: &str) -> Option<NoteFragment> {
    let captures = MARKER.captures(comment)?;
    let marker = captures.get(0)?;

    let raw_id = &captures[1];
    let id = match raw_id.parse::<NoteId>() {
        Ok(id) => id,
        Err(err) => {
            // Only reachable when a group overflows u64
            log::debug!("Ignoring marker: {err}");
            return None;
        }
    };

    Some(NoteFragment {
        id,
        title: captures[2].trim().to_string(),
        body: comment[marker.end()..].trim().to_string(),
    })
}
