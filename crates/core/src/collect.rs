use crate::error::{ArchNotesError, Result};
use crate::extract::extract_notes;
use crate::fs::FileSystem;
use crate::note::Note;
use futures::future::try_join_all;
use std::path::Path;

/// Runs extraction over every file matched by the patterns
pub struct Collector<F> {
    fs: F,
}

impl<F: FileSystem> Collector<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Collect the notes of all matching files.
    ///
    /// Files are read concurrently on the calling task. The first failure
    /// aborts the whole collection; the result carries no particular
    /// cross-file order.
    pub async fn collect(
        &self,
        cwd: &Path,
        patterns: &[String],
        ignore: &[String],
    ) -> Result<Vec<Note>> {
        let paths = self.fs.resolve_patterns(patterns, ignore, cwd).await?;

        let per_file = try_join_all(paths.iter().map(|path| self.collect_file(path))).await?;
        let notes: Vec<Note> = per_file.into_iter().flatten().collect();

        log::info!("Collected {} notes from {} files", notes.len(), paths.len());
        Ok(notes)
    }

    async fn collect_file(&self, path: &Path) -> Result<Vec<Note>> {
        let source = self
            .fs
            .read_file(path)
            .await
            .map_err(|source| ArchNotesError::FileFailure {
                path: path.to_path_buf(),
                source,
            })?;

        extract_notes(path, &source)
    }
}
