//! Output formatting: text report, CSV export and JSON summary.
//!
//! The text report lists raw occurrences (duplicates included); the CSV lists
//! one row per deduplicated signal.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::catalog::SignalCatalog;
use crate::declarations::Declaration;
use crate::error::{IoResultExt, SigextractResult};
use crate::messages;

/// CSV header row.
pub const CSV_HEADER: [&str; 2] = ["Field Name", "Field Dimension"];

/// Paths of the two files written for a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub report: PathBuf,
    pub csv: PathBuf,
}

impl OutputFiles {
    /// `<module>_internal_signals.{txt,csv}` inside `dir`.
    pub fn for_module(dir: &Path, module: &str) -> Self {
        Self {
            report: dir.join(format!("{module}_internal_signals.txt")),
            csv: dir.join(format!("{module}_internal_signals.csv")),
        }
    }
}

fn push_section(out: &mut String, header: String, decls: &[Declaration]) {
    out.push_str(&header);
    out.push_str("\n\n");
    for d in decls {
        out.push_str(&format!("{}   {}\n", d.name, d.dimension));
    }
}

/// Renders the text report: wires section, then registers section.
pub fn render_text_report(source: &Path, catalog: &SignalCatalog) -> String {
    let mut out = String::new();
    push_section(&mut out, messages::wires_header(source), catalog.wires());
    push_section(&mut out, messages::registers_header(source), catalog.registers());
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders the CSV export in mapping order.
pub fn render_csv(catalog: &SignalCatalog) -> String {
    let mut out = format!("{},{}\n", CSV_HEADER[0], CSV_HEADER[1]);
    for entry in catalog.entries() {
        out.push_str(&csv_field(&entry.name));
        out.push(',');
        out.push_str(&csv_field(&entry.dimension));
        out.push('\n');
    }
    out
}

/// Writes both output files into `dir`, creating it when missing.
///
/// Either both files are written or neither is left behind: the report goes
/// first and is removed again if the CSV cannot be written.
pub fn write_outputs(
    dir: &Path,
    module: &str,
    source: &Path,
    catalog: &SignalCatalog,
) -> SigextractResult<OutputFiles> {
    let files = OutputFiles::for_module(dir, module);
    let csv = render_csv(catalog);
    let report = render_text_report(source, catalog);

    fs::create_dir_all(dir).with_output_path(dir)?;
    fs::write(&files.report, report).with_output_path(&files.report)?;
    if let Err(e) = fs::write(&files.csv, csv).with_output_path(&files.csv) {
        if let Err(cleanup) = fs::remove_file(&files.report) {
            tracing::warn!(
                path = %files.report.display(),
                error = %cleanup,
                "could not remove partial report"
            );
        }
        return Err(e);
    }

    tracing::info!(
        report = %files.report.display(),
        csv = %files.csv.display(),
        "output files written"
    );
    Ok(files)
}

/// JSON summary of one extraction.
pub fn summary_json(module: &str, source: &Path, catalog: &SignalCatalog) -> serde_json::Value {
    json!({
        "module": module,
        "source": source.display().to_string(),
        "stats": catalog.stats(),
        "wires": catalog.wires(),
        "registers": catalog.registers(),
        "signals": catalog.entries(),
    })
}

/// Prints the JSON summary to stdout.
pub fn print_json(module: &str, source: &Path, catalog: &SignalCatalog) {
    match serde_json::to_string_pretty(&summary_json(module, source, catalog)) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("[WARN] JSON serialization failed: {}", e),
    }
}
