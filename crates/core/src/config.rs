use crate::error::{ArchNotesError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no config path is given
pub const CONFIG_FILE_NAME: &str = "archnotes.toml";

/// Line ending of the host platform
pub const NATIVE_EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Formatting of the rendered markdown document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Line separator
    pub eol: String,

    /// Heading marker of the document title; note headings nest below it
    pub title_level: String,

    /// Prefix of context links, e.g. `.` or a repository blob URL
    pub base: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            eol: NATIVE_EOL.to_string(),
            title_level: "#".to_string(),
            base: ".".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.eol.is_empty() {
            return Err(ArchNotesError::invalid_config("eol must not be empty"));
        }

        if self.title_level.is_empty() || !self.title_level.chars().all(|c| c == '#') {
            return Err(ArchNotesError::invalid_config(format!(
                "title_level must be one or more `#`, got `{}`",
                self.title_level
            )));
        }

        Ok(())
    }
}

/// Per-project settings read from `archnotes.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Glob patterns of files to scan
    pub patterns: Vec<String>,

    /// Glob patterns of files to skip, relative to the working directory
    pub ignore: Vec<String>,

    pub render: RenderOptions,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            patterns: vec!["**/*.js".to_string()],
            ignore: vec!["**/node_modules/**".to_string()],
            render: RenderOptions::default(),
        }
    }
}

impl ProjectConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|e| ArchNotesError::invalid_config(e.to_string()))?;
        config.render.validate()?;
        Ok(config)
    }

    /// Load `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                log::debug!("Loading config from {}", path.display());
                Self::from_toml_str(&raw)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ArchNotesError::invalid_config(format!(
                "{}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_options_are_valid() {
        let options = RenderOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.title_level, "#");
        assert_eq!(options.base, ".");
    }

    #[test]
    fn rejects_bad_options() {
        let empty_eol = RenderOptions {
            eol: String::new(),
            ..Default::default()
        };
        assert!(empty_eol.validate().is_err());

        for title_level in ["", "#a", "=="] {
            let options = RenderOptions {
                title_level: title_level.to_string(),
                ..Default::default()
            };
            assert!(options.validate().is_err(), "{title_level:?} accepted");
        }
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ProjectConfig::from_toml_str(
            r#"
patterns = ["src/**/*.ts"]

[render]
base = "https://example.com/blob/main"
"#,
        )
        .unwrap();

        assert_eq!(config.patterns, vec!["src/**/*.ts"]);
        assert_eq!(config.ignore, vec!["**/node_modules/**"]);
        assert_eq!(config.render.base, "https://example.com/blob/main");
        assert_eq!(config.render.title_level, "#");
    }

    #[test]
    fn malformed_toml_is_invalid_config() {
        let err = ProjectConfig::from_toml_str("patterns = 3").unwrap_err();
        assert_eq!(err.code(), "E_BAD_CONFIG");

        let err = ProjectConfig::from_toml_str("[render]\ntitle_level = \"x\"").unwrap_err();
        assert_eq!(err.code(), "E_BAD_CONFIG");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = ProjectConfig::load_or_default(&temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }
}
