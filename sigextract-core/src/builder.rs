//! Builder API for running an extraction.
//!
//! ```rust,ignore
//! use sigextract_core::prelude::*;
//!
//! let outcome = Sigextract::new("rtl/fifo.sv")
//!     .output_dir("reports")
//!     .port_gap_limit(Some(16))
//!     .run()?;
//!
//! println!("{} unique signals", outcome.extraction.catalog.stats().unique_total);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::SignalCatalog;
use crate::config::ExtractorConfig;
use crate::declarations::{extract_registers, extract_wires};
use crate::error::SigextractResult;
use crate::messages::{self, Notice};
use crate::module_name::{resolve_module_name, ModuleResolution};
use crate::report::{write_outputs, OutputFiles};
use crate::source::{locate_source, read_source};

/// Non-fatal conditions found while extracting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Zero or several module headers; the fallback name is in use
    AmbiguousModuleName { candidates: Vec<String>, fallback: String },
    NoWiresFound,
    NoRegistersFound,
}

impl Diagnostic {
    /// Console notice for this condition.
    pub fn notice(&self) -> Notice {
        match self {
            Self::AmbiguousModuleName { fallback, .. } => {
                messages::module_name_not_identified(fallback)
            }
            Self::NoWiresFound => messages::no_internal_wires(),
            Self::NoRegistersFound => messages::no_internal_registers(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousModuleName { candidates, fallback } => write!(
                f,
                "{} module header(s) found, using '{}'",
                candidates.len(),
                fallback
            ),
            Self::NoWiresFound => f.write_str("no internal wires found"),
            Self::NoRegistersFound => f.write_str("no internal registers found"),
        }
    }
}

/// Result of analyzing one module's text.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub source_path: PathBuf,
    pub module: ModuleResolution,
    pub catalog: SignalCatalog,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Name used for the output files.
    pub fn module_name(&self) -> &str {
        &self.module.name
    }
}

/// Extraction plus the files written for it.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub extraction: Extraction,
    pub files: OutputFiles,
}

/// Runs the resolver, both matchers and the aggregator over `source`.
pub fn analyze_source(source_path: &Path, source: &str, config: &ExtractorConfig) -> Extraction {
    let module = resolve_module_name(source);
    let wires = extract_wires(source, config.port_gap_limit);
    let registers = extract_registers(source, config.port_gap_limit);

    let mut diagnostics = Vec::new();
    if module.is_ambiguous() {
        diagnostics.push(Diagnostic::AmbiguousModuleName {
            candidates: module.candidates.clone(),
            fallback: module.name.clone(),
        });
    }
    if wires.is_empty() {
        diagnostics.push(Diagnostic::NoWiresFound);
    }
    if registers.is_empty() {
        diagnostics.push(Diagnostic::NoRegistersFound);
    }

    let catalog = SignalCatalog::build(wires, registers);
    let stats = catalog.stats();
    tracing::info!(
        module = %module.name,
        unique_wires = stats.unique_wires,
        unique_registers = stats.unique_registers,
        unique_total = stats.unique_total,
        "signals extracted"
    );

    Extraction {
        source_path: source_path.to_path_buf(),
        module,
        catalog,
        diagnostics,
    }
}

/// Builder for a single-file extraction.
#[derive(Debug, Clone)]
pub struct Sigextract {
    /// Module file to read; `None` reports a missing argument
    input: Option<PathBuf>,

    config: ExtractorConfig,
}

impl Sigextract {
    /// Create a builder for the given module file.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: Some(input.into()),
            config: ExtractorConfig::default(),
        }
    }

    /// Create a builder from an optional command-line argument.
    pub fn from_arg(input: Option<PathBuf>) -> Self {
        Self {
            input,
            config: ExtractorConfig::default(),
        }
    }

    /// Replace all settings at once.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Directory for the report and CSV files.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Whitespace bound between a port keyword and `wire`/`reg`; `None` = unbounded.
    pub fn port_gap_limit(mut self, limit: Option<usize>) -> Self {
        self.config.port_gap_limit = limit;
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The input path, once it is known to name an existing file.
    pub fn input(&self) -> SigextractResult<&Path> {
        locate_source(self.input.as_deref())
    }

    /// Read the input and extract signals without writing anything.
    pub fn extract(&self) -> SigextractResult<Extraction> {
        let path = self.input()?;
        let source = read_source(Some(path))?;
        Ok(analyze_source(path, &source, &self.config))
    }

    /// Write both output files for `extraction` into the output directory.
    pub fn write(&self, extraction: &Extraction) -> SigextractResult<OutputFiles> {
        write_outputs(
            &self.config.output_dir,
            extraction.module_name(),
            &extraction.source_path,
            &extraction.catalog,
        )
    }

    /// Extract and write both output files.
    pub fn run(&self) -> SigextractResult<RunOutcome> {
        let extraction = self.extract()?;
        let files = self.write(&extraction)?;
        Ok(RunOutcome { extraction, files })
    }
}
