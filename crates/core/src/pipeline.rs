use crate::collect::Collector;
use crate::config::RenderOptions;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::note::Note;
use crate::order::sort_notes;
use crate::render::MarkdownRenderer;
use std::path::Path;

/// Files in, ordered markdown out
pub struct ArchitectureNotes<F> {
    collector: Collector<F>,
    renderer: MarkdownRenderer,
}

impl<F: FileSystem> ArchitectureNotes<F> {
    pub fn new(fs: F, options: RenderOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            collector: Collector::new(fs),
            renderer: MarkdownRenderer::new(options),
        })
    }

    /// Collected notes in outline order
    pub async fn notes(
        &self,
        cwd: &Path,
        patterns: &[String],
        ignore: &[String],
    ) -> Result<Vec<Note>> {
        let mut notes = self.collector.collect(cwd, patterns, ignore).await?;
        sort_notes(&mut notes);
        Ok(notes)
    }

    /// Build the markdown document; empty when no note was found
    pub async fn build(&self, cwd: &Path, patterns: &[String], ignore: &[String]) -> Result<String> {
        let notes = self.notes(cwd, patterns, ignore).await?;
        Ok(self.renderer.render(&notes, cwd))
    }
}
