use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use super::DocumentFormat;

/// Where a saved parent record is written.
#[derive(Debug, Clone)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }

    fn write(&self, document: &str) -> Result<()> {
        match self {
            OutputDestination::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{document}")
                    .and_then(|_| stdout.flush())
                    .context("failed to write record to stdout")
            }
            OutputDestination::File(path) => {
                if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    fs::create_dir_all(dir)
                        .with_context(|| format!("failed to create {}", dir.display()))?;
                }
                fs::write(path, format!("{document}\n"))
                    .with_context(|| format!("failed to write record to {}", path.display()))
            }
        }
    }
}

/// How a saved record leaves the editor.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Serializes the record in the configured format without writing it.
    pub fn render(&self, record: &Value) -> Result<String> {
        let document = match (self.format, self.pretty) {
            (DocumentFormat::Json, true) => serde_json::to_string_pretty(record)?,
            (DocumentFormat::Json, false) => serde_json::to_string(record)?,
            #[cfg(feature = "yaml")]
            (DocumentFormat::Yaml, _) => serde_yaml::to_string(record)?
                .trim_end()
                .to_string(),
            #[cfg(feature = "toml")]
            (DocumentFormat::Toml, true) => toml::to_string_pretty(record)?,
            #[cfg(feature = "toml")]
            (DocumentFormat::Toml, false) => toml::to_string(record)?,
        };
        Ok(document)
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

/// Writes the saved record to every configured destination.
pub fn emit(record: &Value, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        debug!("no output destinations; record kept in memory only");
        return Ok(());
    }
    let document = options
        .render(record)
        .with_context(|| format!("failed to serialize record as {}", options.format))?;
    for destination in &options.destinations {
        destination.write(&document)?;
        info!(format = %options.format, ?destination, "record written");
    }
    Ok(())
}
