//! sigextract-core: internal signal extraction for Verilog and SystemVerilog modules
//!
//! Reads one module file, finds the `wire` and `reg` declarations that are not
//! ports, deduplicates them and writes a text report plus a CSV export.
//!
//! Matching is textual, not a parse: there is no tokenizer or symbol table,
//! and a file is treated as a single module.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sigextract_core::prelude::*;
//!
//! let outcome = Sigextract::new("rtl/alu.v").output_dir("out").run()?;
//! for entry in outcome.extraction.catalog.entries() {
//!     println!("{} {}", entry.name, entry.dimension);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`module_name`]: module header resolution with a `"module"` fallback
//! - [`declarations`]: wire/register matching with port exclusion
//! - [`catalog`]: deduplication and counts
//! - [`report`]: text report, CSV and JSON output
//! - [`builder`]: fluent API tying the stages together
//! - [`messages`]: console message table
//! - [`error`]: typed error handling

pub mod builder;
pub mod catalog;
pub mod config;
pub mod declarations;
pub mod error;
pub mod logging;
pub mod messages;
pub mod module_name;
pub mod prelude;
pub mod report;
pub mod source;

// ============================================================================
// Explicit Re-exports
// ============================================================================

// Error types
pub use error::{IoResultExt, SigextractError, SigextractResult};

// Builder API
pub use builder::{analyze_source, Diagnostic, Extraction, RunOutcome, Sigextract};

// Aggregation
pub use catalog::{CatalogStats, SignalCatalog, SignalEntry};

// Configuration
pub use config::{
    discover_config, load_config, ExtractorConfig, OutputConfig, SigextractConfig,
    DEFAULT_PORT_GAP_LIMIT,
};

// Matching
pub use declarations::{
    extract_declarations, extract_registers, extract_wires, is_port_prefixed, Declaration,
    SignalKind,
};
pub use module_name::{
    find_module_headers, resolve_module_name, ModuleResolution, FALLBACK_MODULE_NAME,
};

// Logging
pub use logging::{init_structured_logging, log_notice};

// Console messages
pub use messages::{Notice, NoticeKind};

// Reporting
pub use report::{
    print_json, render_csv, render_text_report, summary_json, write_outputs, OutputFiles,
};

// Input
pub use source::{locate_source, read_source};
