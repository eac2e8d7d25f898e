use crate::config::RenderOptions;
use crate::note::Note;
use std::path::{Component, Path, PathBuf};

/// Markdown renderer for an ordered sequence of notes
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render notes in the given order. No notes means no document at all.
    pub fn render(&self, notes: &[Note], cwd: &Path) -> String {
        if notes.is_empty() {
            return String::new();
        }

        let RenderOptions {
            eol,
            title_level,
            base,
        } = &self.options;
        let gap = eol.repeat(2);

        let mut md = String::new();
        md.push_str(&format!("{title_level} Architecture Notes{gap}"));

        for note in notes {
            let heading = "#".repeat(note.id().depth());
            md.push_str(&format!("{title_level}{heading} {}{gap}", note.title()));
            if !note.body().is_empty() {
                md.push_str(note.body());
                md.push_str(&gap);
            }
            md.push_str(&context_link(note, cwd, base));
            md.push_str(&gap);
        }

        md
    }
}

fn context_link(note: &Note, cwd: &Path, base: &str) -> String {
    let range = note.source_range();
    format!(
        "[See in context]({}/{}#L{}-L{})",
        base.trim_end_matches('/'),
        to_link_path(&relative_to(note.source_path(), cwd)),
        range.start_line,
        range.end_line
    )
}

/// Path of `path` as seen from `cwd`, climbing with `..` when needed
fn relative_to(path: &Path, cwd: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix(cwd) {
        return stripped.to_path_buf();
    }

    let path_parts: Vec<Component> = path.components().collect();
    let cwd_parts: Vec<Component> = cwd.components().collect();
    let common = path_parts
        .iter()
        .zip(&cwd_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..cwd_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }
    relative
}

fn to_link_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{NoteFragment, SourceRange};
    use pretty_assertions::assert_eq;

    fn note(id: &str, title: &str, body: &str, path: &str, lines: (usize, usize)) -> Note {
        Note::new(
            NoteFragment {
                id: id.parse().unwrap(),
                title: title.to_string(),
                body: body.to_string(),
            },
            PathBuf::from(path),
            SourceRange {
                start_line: lines.0,
                end_line: lines.1,
            },
        )
    }

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer::new(RenderOptions {
            eol: "\n".to_string(),
            ..RenderOptions::default()
        })
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(renderer().render(&[], Path::new("/repo")), "");
    }

    #[test]
    fn context_link_is_relative_to_cwd() {
        let n = note("1", "T", "B", "/repo/src/a.js", (10, 14));
        assert_eq!(
            context_link(&n, Path::new("/repo"), "."),
            "[See in context](./src/a.js#L10-L14)"
        );
    }

    #[test]
    fn context_link_climbs_out_of_cwd() {
        let n = note("1", "T", "B", "/repo/lib/a.js", (1, 2));
        assert_eq!(
            context_link(&n, Path::new("/repo/packages/app"), "https://example.com/blob/main/"),
            "[See in context](https://example.com/blob/main/../../lib/a.js#L1-L2)"
        );
    }

    #[test]
    fn renders_nested_headings() {
        let notes = vec![
            note("1", "Overview", "The big picture.", "/repo/src/index.js", (1, 5)),
            note("1.1", "Detail", "", "/repo/src/detail.js", (3, 3)),
        ];

        let md = renderer().render(&notes, Path::new("/repo"));
        assert_eq!(
            md,
            "# Architecture Notes\n\n\
             ## Overview\n\n\
             The big picture.\n\n\
             [See in context](./src/index.js#L1-L5)\n\n\
             ### Detail\n\n\
             [See in context](./src/detail.js#L3-L3)\n\n"
        );
    }

    #[test]
    fn title_level_and_eol_are_configurable() {
        let renderer = MarkdownRenderer::new(RenderOptions {
            eol: "\r\n".to_string(),
            title_level: "##".to_string(),
            base: "docs/..".to_string(),
        });
        let notes = vec![note("2.4", "Deep", "Body", "/repo/a.js", (7, 9))];

        let md = renderer.render(&notes, Path::new("/repo"));
        assert_eq!(
            md,
            "## Architecture Notes\r\n\r\n\
             #### Deep\r\n\r\n\
             Body\r\n\r\n\
             [See in context](docs/../a.js#L7-L9)\r\n\r\n"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let notes = vec![
            note("1", "A", "a", "/repo/a.js", (1, 1)),
            note("2", "B", "b", "/repo/b.js", (2, 2)),
        ];
        let r = renderer();
        assert_eq!(
            r.render(&notes, Path::new("/repo")),
            r.render(&notes, Path::new("/repo"))
        );
    }
}
