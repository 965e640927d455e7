use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use serde_json::Value;

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Read a parent record from a file, or from stdin when `spec` is `-`.
///
/// The format follows the file extension and falls back to `fallback`.
pub fn read_document(spec: &str, fallback: DocumentFormat) -> Result<Value> {
    if spec == "-" {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .context("failed to read record from stdin")?;
        return parse_document_str(&contents, fallback);
    }
    let path = Path::new(spec);
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read record from {}", path.display()))?;
    let format = DocumentFormat::from_path(path).unwrap_or(fallback);
    parse_document_str(&contents, format)
        .with_context(|| format!("failed to load {}", path.display()))
}
