mod records;

use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use collectui::{
    CollectionUI, DocumentFormat, OutputDestination, OutputOptions, UiOptions, read_document,
};

#[derive(Debug, Parser)]
#[command(
    name = "collectui",
    version,
    about = "Edit the links, citations and hearings of a case record in the terminal"
)]
struct Cli {
    /// Existing case record to edit: file path or "-" for stdin
    #[arg(short = 'r', long = "record", value_name = "SPEC")]
    record: Option<String>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations ("-" writes to stdout). Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Open every collection read-only
    #[arg(long = "readonly")]
    readonly: bool,

    /// Hide the url/date/time format hints in the entry form
    #[arg(long = "no-hints")]
    no_hints: bool,

    /// Write logs to this file; filter with RUST_LOG
    #[arg(long = "log", value_name = "PATH")]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    if let Some(path) = cli.log.as_deref() {
        init_logging(path)?;
    }

    let mut diagnostics = DiagnosticCollector::default();
    let record_format = cli
        .record
        .as_deref()
        .filter(|spec| *spec != "-")
        .and_then(|spec| resolve_record_format(Path::new(spec), &mut diagnostics));
    let record = match cli.record.as_deref() {
        Some(spec) if diagnostics.is_empty() => {
            load_record(spec, record_format.unwrap_or_default(), &mut diagnostics)
        }
        _ => None,
    };

    let (output, output_paths) = build_output_options(&cli, record_format, &mut diagnostics);
    ensure_output_paths_available(&output_paths, cli.force, &mut diagnostics);

    diagnostics.into_result()?;

    let form = records::processo_form(record, cli.readonly)?;
    let options = UiOptions::default().with_format_hints(!cli.no_hints);
    let title = cli.title.clone().unwrap_or_else(|| "Processo".to_string());
    let mut ui = CollectionUI::new(form).with_title(title).with_options(options);
    if let Some(output) = output {
        ui = ui.with_output(output);
    }

    ui.run().map_err(Report::msg)?;
    info!("case record saved");
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("collectui=debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    info!(path = %path.display(), "logging initialised");
    Ok(())
}

fn resolve_record_format(path: &Path, diagnostics: &mut DiagnosticCollector) -> Option<DocumentFormat> {
    match format_from_extension(path) {
        ExtensionFormat::Known(format) => Some(format),
        ExtensionFormat::UnsupportedFeature {
            format_name,
            feature_flag,
        } => {
            diagnostics.push_input(
                "record",
                format!(
                    "record '{}' requires {format_name} support, but this build lacks the '{feature_flag}' feature",
                    path.display()
                ),
            );
            None
        }
        ExtensionFormat::Unknown => None,
    }
}

fn load_record(
    spec: &str,
    format: DocumentFormat,
    diagnostics: &mut DiagnosticCollector,
) -> Option<Value> {
    match read_document(spec, format) {
        Ok(value) => Some(value),
        Err(err) => {
            diagnostics.push_input("record", format!("{err:#}"));
            None
        }
    }
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn len(&self) -> usize {
        self.messages.len()
    }

    fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

fn build_output_options(
    cli: &Cli,
    record_hint: Option<DocumentFormat>,
    diagnostics: &mut DiagnosticCollector,
) -> (Option<OutputOptions>, Vec<PathBuf>) {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            destinations.push(OutputDestination::file(raw));
        }
    }
    if cli.outputs.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }
    if destinations.is_empty() {
        return (None, Vec::new());
    }

    let file_paths: Vec<PathBuf> = destinations
        .iter()
        .filter_map(|dest| match dest {
            OutputDestination::File(path) => Some(path.clone()),
            OutputDestination::Stdout => None,
        })
        .collect();

    let start = diagnostics.len();
    let format = if file_paths.is_empty() {
        record_hint.unwrap_or_default()
    } else {
        infer_format_from_files(&file_paths, diagnostics).unwrap_or_default()
    };
    if diagnostics.len() > start {
        return (None, file_paths);
    }

    let options = OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations);
    (Some(options), file_paths)
}

fn infer_format_from_files(
    file_paths: &[PathBuf],
    diagnostics: &mut DiagnosticCollector,
) -> Option<DocumentFormat> {
    let mut detected: Option<DocumentFormat> = None;
    for path in file_paths {
        match format_from_extension(path) {
            ExtensionFormat::Known(format) => match detected {
                Some(existing) if existing != format => diagnostics.push_output(format!(
                    "output file {} uses {format} but other destinations use {existing}; align extensions",
                    path.display()
                )),
                Some(_) => {}
                None => detected = Some(format),
            },
            ExtensionFormat::UnsupportedFeature {
                format_name,
                feature_flag,
            } => diagnostics.push_output(format!(
                "output file {} requires {format_name} support, but this build was compiled without the '{feature_flag}' feature",
                path.display()
            )),
            ExtensionFormat::Unknown => diagnostics.push_output(format!(
                "cannot infer format from output file {}; use .json/.yaml/.toml",
                path.display()
            )),
        }
    }
    detected
}

#[derive(Debug)]
enum ExtensionFormat {
    Known(DocumentFormat),
    #[allow(dead_code)]
    UnsupportedFeature {
        format_name: &'static str,
        feature_flag: &'static str,
    },
    Unknown,
}

fn format_from_extension(path: &Path) -> ExtensionFormat {
    let Some(ext) = path.extension() else {
        return ExtensionFormat::Unknown;
    };
    let normalized = ext.to_string_lossy().to_ascii_lowercase();
    match normalized.as_str() {
        "json" => ExtensionFormat::Known(DocumentFormat::Json),
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => ExtensionFormat::Known(DocumentFormat::Yaml),
        #[cfg(not(feature = "yaml"))]
        "yaml" | "yml" => ExtensionFormat::UnsupportedFeature {
            format_name: "yaml",
            feature_flag: "yaml",
        },
        #[cfg(feature = "toml")]
        "toml" => ExtensionFormat::Known(DocumentFormat::Toml),
        #[cfg(not(feature = "toml"))]
        "toml" => ExtensionFormat::UnsupportedFeature {
            format_name: "toml",
            feature_flag: "toml",
        },
        _ => ExtensionFormat::Unknown,
    }
}

fn ensure_output_paths_available(
    paths: &[PathBuf],
    force: bool,
    diagnostics: &mut DiagnosticCollector,
) {
    if force {
        return;
    }
    for path in paths {
        if path.exists() {
            diagnostics.push_output(format!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
    }
}
