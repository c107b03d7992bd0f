//! sigextract CLI - lists the internal wires and registers of a Verilog or
//! SystemVerilog module.
//!
//! Writes `<module>_internal_signals.txt` (raw occurrences) and
//! `<module>_internal_signals.csv` (one row per unique signal), then prints a
//! summary. Every stage reports a tagged notice on the console.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sigextract_core::{
    discover_config, init_structured_logging, log_notice, messages, print_json, ExtractorConfig,
    Notice, NoticeKind, Sigextract, SigextractConfig, SigextractError,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Extracts internal wire and register declarations from a Verilog/SystemVerilog module"
)]
pub struct Cli {
    /// Path to the Verilog or SystemVerilog module file
    #[arg(long, value_name = "PATH")]
    filename: Option<PathBuf>,

    /// Directory for the report and CSV files (default: current directory)
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum whitespace between input/output and wire/reg for a port declaration
    #[arg(long, value_name = "N", conflicts_with = "unbounded_port_gap")]
    port_gap_limit: Option<usize>,

    /// Treat any amount of whitespace after input/output as a port declaration
    #[arg(long)]
    unbounded_port_gap: bool,

    /// Also print the extraction summary as JSON
    #[arg(long)]
    json: bool,

    /// Only print errors
    #[arg(long)]
    quiet: bool,
}

/// Console printer honoring `--quiet`.
struct Console {
    quiet: bool,
}

impl Console {
    fn notice(&self, notice: &Notice) {
        log_notice(notice);
        match notice.kind {
            NoticeKind::Error => eprintln!("{}", notice),
            _ if self.quiet => {}
            _ => println!("{}", notice),
        }
    }

    fn banner(&self, text: &str) {
        if !self.quiet {
            println!("{}", text);
        }
    }

    /// Reports a stopped run; always returns `false`.
    fn failure(&self, err: &SigextractError) -> bool {
        tracing::debug!(path = ?err.path(), error = %err, "extraction stopped");
        self.notice(&error_notice(err));
        false
    }
}

/// Merges sigextract.toml values with command-line flags (flags win).
fn resolve_config(cli: &Cli, file: Option<&SigextractConfig>) -> ExtractorConfig {
    let mut config = file.map(ExtractorConfig::from).unwrap_or_default();

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if cli.unbounded_port_gap {
        config.port_gap_limit = None;
    } else if let Some(limit) = cli.port_gap_limit {
        config.port_gap_limit = Some(limit);
    }
    config
}

/// Notice for a failed extraction.
fn error_notice(err: &SigextractError) -> Notice {
    match err {
        SigextractError::MissingArgument => messages::no_input(),
        SigextractError::FileNotFound { path } => messages::no_such_file(path),
        SigextractError::Read { path, message, .. } => messages::file_read_error(path, message),
        SigextractError::Write { path, message, .. } => messages::write_failed(path, message),
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let console = Console { quiet: cli.quiet };
    let builder = Sigextract::from_arg(cli.filename.clone());

    // the input must exist before its directory is searched for sigextract.toml
    let input = match builder.input() {
        Ok(path) => path.to_path_buf(),
        Err(err) => return Ok(console.failure(&err)),
    };

    let file_config = discover_config(&input).context("Failed to load sigextract.toml")?;
    let json = cli.json || file_config.as_ref().is_some_and(|c| c.wants_json());
    let builder = builder.with_config(resolve_config(cli, file_config.as_ref()));

    let extraction = match builder.extract() {
        Ok(extraction) => extraction,
        Err(err) => return Ok(console.failure(&err)),
    };
    console.notice(&messages::file_read_success());

    for diagnostic in &extraction.diagnostics {
        tracing::debug!(%diagnostic, "non-fatal condition");
        console.notice(&diagnostic.notice());
    }

    let files = match builder.write(&extraction) {
        Ok(files) => files,
        Err(err) => return Ok(console.failure(&err)),
    };

    console.banner(&messages::goodbye(&files.report, &files.csv));
    console.banner(&messages::summary(
        extraction.module_name(),
        &extraction.catalog.stats(),
    ));

    if json {
        print_json(
            extraction.module_name(),
            &extraction.source_path,
            &extraction.catalog,
        );
    }

    Ok(true)
}

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] sigextract internal error: {}", info);
        eprintln!("[PANIC] No output files were completed.");
    }));

    // JSON logs to stderr, filtered by RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{}", Notice::error(format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("sigextract").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_override_file_config() {
        let file = SigextractConfig {
            output_dir: Some(PathBuf::from("from_file")),
            port_gap_limit: Some(4),
            ..Default::default()
        };
        let args = cli(&["--filename", "a.v", "--output-dir", "from_flag"]);

        let config = resolve_config(&args, Some(&file));
        assert_eq!(config.output_dir, PathBuf::from("from_flag"));
        assert_eq!(config.port_gap_limit, Some(4));
    }

    #[test]
    fn test_unbounded_flag() {
        let args = cli(&["--filename", "a.v", "--unbounded-port-gap"]);
        assert_eq!(resolve_config(&args, None).port_gap_limit, None);
    }

    #[test]
    fn test_defaults_without_config() {
        let args = cli(&[]);
        assert!(args.filename.is_none());
        assert_eq!(resolve_config(&args, None), ExtractorConfig::default());
    }

    #[test]
    fn test_conflicting_gap_flags_rejected() {
        let parsed = Cli::try_parse_from([
            "sigextract",
            "--port-gap-limit",
            "3",
            "--unbounded-port-gap",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_error_notice_variants() {
        let missing = error_notice(&SigextractError::MissingArgument);
        assert_eq!(missing, messages::no_input());

        let not_found = error_notice(&SigextractError::not_found("x.v"));
        assert!(not_found.text.contains("'x.v'"));
        assert_eq!(not_found.kind, NoticeKind::Error);
    }
}
