use anyhow::{bail, Context as AnyhowContext, Result};
use archnotes_core::{
    ArchNotesError, ArchitectureNotes, LocalFileSystem, ProjectConfig, CONFIG_FILE_NAME,
};
use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::flags::{EolFlag, OutputFormat};

mod flags;

#[derive(Parser)]
#[command(name = "archnotes")]
#[command(about = "Build an architecture document from notes kept in code comments", long_about = None)]
#[command(version)]
struct Cli {
    /// Glob patterns of files to scan (defaults to archnotes.toml, then `**/*.js`)
    patterns: Vec<String>,

    /// Directory patterns and context links are relative to
    #[arg(long)]
    cwd: Option<PathBuf>,

    /// Glob pattern of files to skip; repeat to add more (replaces configured ones)
    #[arg(long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Config file (defaults to archnotes.toml in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefix of context links
    #[arg(long)]
    base: Option<String>,

    /// Heading marker of the document title, e.g. `##`
    #[arg(long)]
    title_level: Option<String>,

    /// Line ending of the generated document
    #[arg(long, value_enum)]
    eol: Option<EolFlag>,

    /// Output format
    #[arg(long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<ArchNotesError>())
                .map(ArchNotesError::code);
            match code {
                Some(code) => eprintln!("error [{code}]: {err:#}"),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cwd = match &cli.cwd {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("Failed to read current directory")?,
    };
    let cwd = cwd
        .canonicalize()
        .with_context(|| format!("Invalid working directory {}", cwd.display()))?;

    let config = load_config(&cli, &cwd)?;
    log::debug!(
        "Scanning {} with patterns {:?} (ignoring {:?})",
        cwd.display(),
        config.patterns,
        config.ignore
    );

    let pipeline = ArchitectureNotes::new(LocalFileSystem, config.render.clone())?;
    let output = match cli.format {
        OutputFormat::Markdown => {
            pipeline
                .build(&cwd, &config.patterns, &config.ignore)
                .await?
        }
        OutputFormat::Json => {
            let notes = pipeline
                .notes(&cwd, &config.patterns, &config.ignore)
                .await?;
            let mut json = serde_json::to_string_pretty(&notes)?;
            json.push('\n');
            json
        }
    };

    write_output(cli.output.as_deref(), &output)
}

/// Config file values with command line flags layered on top
fn load_config(cli: &Cli, cwd: &Path) -> Result<ProjectConfig> {
    let path = match &cli.config {
        Some(path) if !path.exists() => bail!("Config file {} not found", path.display()),
        Some(path) => path.clone(),
        None => cwd.join(CONFIG_FILE_NAME),
    };
    let mut config = ProjectConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if !cli.patterns.is_empty() {
        config.patterns = cli.patterns.clone();
    }
    if !cli.ignore.is_empty() {
        config.ignore = cli.ignore.clone();
    }
    if let Some(base) = &cli.base {
        config.render.base = base.clone();
    }
    if let Some(title_level) = &cli.title_level {
        config.render.title_level = title_level.clone();
    }
    if let Some(eol) = cli.eol {
        config.render.eol = eol.as_str().to_string();
    }

    Ok(config)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
