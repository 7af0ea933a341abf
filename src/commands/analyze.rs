use crate::config::ScanConfig;
use crate::errors::{DevtoolError, Result};
use crate::io::{self, OutputFormat};
use crate::scanner;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub scan: ScanConfig,
}

impl AnalyzeConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: OutputFormat::default(),
            output: None,
            scan: ScanConfig::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

/// Run the analyze command, printing to stdout.
pub fn handle_analyze(config: AnalyzeConfig) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    run_analyze(&config, &mut stdout.lock())
}

/// Validate the root, scan it, and emit the rendered report to `out`
/// (and to the output file when one is configured).
pub fn run_analyze<W: Write>(config: &AnalyzeConfig, out: &mut W) -> anyhow::Result<()> {
    let root = validate_root(&config.path)?;
    log::info!("Analyzing {}", root.display());

    let report = scanner::build_report(&root, &config.scan);
    let rendered = io::render(&report, config.format, &config.scan.label)?;
    writeln!(out, "{rendered}")?;

    if let Some(output) = &config.output {
        let written = write_report(output, &rendered)?;
        writeln!(out, "Wrote report to: {}", written.display())?;
    }

    Ok(())
}

/// Resolve `path` and require it to be an existing directory.
pub fn validate_root(path: &Path) -> Result<PathBuf> {
    let root = io::resolve(path);
    if !root.exists() {
        return Err(DevtoolError::PathNotFound(root));
    }
    if !root.is_dir() {
        return Err(DevtoolError::NotADirectory(root));
    }
    Ok(root)
}

/// Write `content` to `path`, creating or truncating it. Returns the
/// resolved path that was written.
pub fn write_report(path: &Path, content: &str) -> Result<PathBuf> {
    let target = io::expand_tilde(path);
    std::fs::write(&target, content).map_err(|source| DevtoolError::WriteReport {
        path: io::resolve(&target),
        source,
    })?;
    Ok(io::resolve(&target))
}
