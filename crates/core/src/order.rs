//! Hierarchical ordering of notes.

use crate::note::Note;
use std::cmp::Ordering;

/// Compare two dotted ids component by component.
///
/// Components compare numerically, so `2` sorts before `10`. When one id is
/// a strict prefix of the other, the ancestor sorts first.
pub fn compare_ids(a: &[u64], b: &[u64]) -> Ordering {
    for (i, component) in a.iter().enumerate() {
        let Some(other) = b.get(i) else {
            return Ordering::Greater;
        };
        match component.cmp(other) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }

    if a.len() < b.len() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

pub fn compare_notes(a: &Note, b: &Note) -> Ordering {
    a.id().cmp(b.id())
}

/// Stable sort: notes sharing an id keep their discovery order.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(compare_notes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{NoteFragment, SourceRange};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn note(id: &str, title: &str) -> Note {
        Note::new(
            NoteFragment {
                id: id.parse().unwrap(),
                title: title.to_string(),
                body: String::new(),
            },
            PathBuf::from("/repo/a.js"),
            SourceRange {
                start_line: 1,
                end_line: 1,
            },
        )
    }

    fn ids(notes: &[Note]) -> Vec<String> {
        notes.iter().map(|n| n.id().to_string()).collect()
    }

    #[test]
    fn numeric_not_lexicographic() {
        let mut notes = vec![
            note("10", ""),
            note("1.2", ""),
            note("2", ""),
            note("1", ""),
            note("1.1", ""),
        ];
        sort_notes(&mut notes);
        assert_eq!(ids(&notes), vec!["1", "1.1", "1.2", "2", "10"]);
    }

    #[test]
    fn ancestor_before_descendant() {
        assert_eq!(compare_notes(&note("1", ""), &note("1.1", "")), Ordering::Less);
        assert_eq!(compare_notes(&note("1.1", ""), &note("1", "")), Ordering::Greater);
    }

    #[test]
    fn walk_short_circuits_on_first_difference() {
        assert_eq!(compare_ids(&[1, 9, 9], &[2]), Ordering::Less);
        assert_eq!(compare_ids(&[3], &[2, 5]), Ordering::Greater);
        assert_eq!(compare_ids(&[1, 2], &[1, 2]), Ordering::Equal);
    }

    #[test]
    fn duplicates_keep_discovery_order() {
        let mut notes = vec![
            note("2", "second-a"),
            note("1", "first"),
            note("2", "second-b"),
            note("2", "second-c"),
        ];
        sort_notes(&mut notes);
        let titles: Vec<_> = notes.iter().map(Note::title).collect();
        assert_eq!(titles, vec!["first", "second-a", "second-b", "second-c"]);
    }

    #[test]
    fn sparse_and_deep_ids_sort_hierarchically() {
        let mut notes = vec![
            note("3.0.1", ""),
            note("1.5.2.8", ""),
            note("3", ""),
            note("1.5", ""),
            note("0", ""),
        ];
        sort_notes(&mut notes);
        assert_eq!(ids(&notes), vec!["0", "1.5", "1.5.2.8", "3", "3.0.1"]);
    }
}
