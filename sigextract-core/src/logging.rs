//! Structured logging using **tracing**.
//!
//! Console notices for the user come from [`crate::messages`]; this module
//! feeds the machine-readable stream on stderr and mirrors each notice into it.

use tracing::{error, info, warn};

use crate::messages::{Notice, NoticeKind};

/// Initializes the global tracing subscriber.
///
/// Output is JSON on stderr, filtered through `RUST_LOG`
/// (e.g. `RUST_LOG=sigextract_core=debug`). A second call is a no-op.
pub fn init_structured_logging() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Records a console notice as a structured event.
///
/// Errors log at `error`, successes at `info`; informational notices log at
/// `warn` since they always describe something missing from the input.
pub fn log_notice(notice: &Notice) {
    let text = notice.text.replace(['\n', '\t'], " ");
    match notice.kind {
        NoticeKind::Error => error!(notice = "error", detail = %text),
        NoticeKind::Info => warn!(notice = "info", detail = %text),
        NoticeKind::Success => info!(notice = "success", detail = %text),
    }
}
