//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use sigextract_core::prelude::*;
//! ```

pub use crate::builder::{analyze_source, Diagnostic, Extraction, RunOutcome, Sigextract};
pub use crate::catalog::{CatalogStats, SignalCatalog, SignalEntry};
pub use crate::config::{discover_config, ExtractorConfig};
pub use crate::declarations::{Declaration, SignalKind};
pub use crate::error::{SigextractError, SigextractResult};
pub use crate::module_name::{ModuleResolution, FALLBACK_MODULE_NAME};
pub use crate::report::OutputFiles;
