use crate::error::{ArchNotesError, Result};
use async_trait::async_trait;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Source of files for the collector
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Expand glob patterns relative to `cwd` into absolute file paths
    async fn resolve_patterns(
        &self,
        patterns: &[String],
        ignore: &[String],
        cwd: &Path,
    ) -> Result<Vec<PathBuf>>;

    async fn read_file(&self, path: &Path) -> std::io::Result<String>;
}

/// The real disk, expanded with `glob`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn resolve_patterns(
        &self,
        patterns: &[String],
        ignore: &[String],
        cwd: &Path,
    ) -> Result<Vec<PathBuf>> {
        let ignored = build_ignore_set(ignore)?;
        let root = glob::Pattern::escape(&cwd.to_string_lossy());

        let mut files = BTreeSet::new();
        for pattern in patterns {
            let absolute = if Path::new(pattern).is_absolute() {
                pattern.clone()
            } else {
                format!("{}/{}", root.trim_end_matches('/'), pattern)
            };

            let entries =
                glob::glob(&absolute).map_err(|e| ArchNotesError::pattern(pattern, e))?;
            for entry in entries {
                let path = entry.map_err(|e| ArchNotesError::pattern(pattern, e))?;
                if !path.is_file() {
                    continue;
                }

                let relative = path.strip_prefix(cwd).unwrap_or(&path);
                if ignored.is_match(relative) {
                    log::debug!("Skipping ignored file {}", path.display());
                    continue;
                }

                files.insert(path);
            }
        }

        log::info!("Found {} files matching {} patterns", files.len(), patterns.len());
        Ok(files.into_iter().collect())
    }

    async fn read_file(&self, path: &Path) -> std::io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

fn build_ignore_set(ignore: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in ignore {
        let glob = Glob::new(pattern).map_err(|e| ArchNotesError::pattern(pattern, e))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| ArchNotesError::pattern(ignore.join(", "), e))
}
