//! crates/logging/src/tracing_bridge.rs
//! Forwards emitted diagnostics to the `tracing` facade.
//!
//! Applications that already run a tracing subscriber observe every line the
//! log emits, with the severity mapped onto the closest tracing level and
//! the numeric code recorded as a field. The bridge only forwards lines that
//! pass routing; disabled severities stay invisible on both surfaces.
//! Installing a subscriber remains the embedding application's concern.

use diagnostic::Severity;
use tracing::Level;

/// Tracing target carried by every forwarded event.
pub const TARGET: &str = "diagnostic";

/// Returns the tracing level a severity is forwarded at.
///
/// Verbose output maps to `DEBUG` and debugging output to `TRACE`, keeping
/// the five severities distinct on the tracing side.
#[must_use]
pub const fn severity_level(severity: Severity) -> Level {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARN,
        Severity::Info => Level::INFO,
        Severity::Verbose => Level::DEBUG,
        Severity::Debug => Level::TRACE,
    }
}

/// Forwards one emitted diagnostic to the active subscriber, if any.
pub(crate) fn forward(severity: Severity, code: Option<i32>, text: &str) {
    match severity {
        Severity::Error => tracing::error!(target: TARGET, code, "{text}"),
        Severity::Warning => tracing::warn!(target: TARGET, code, "{text}"),
        Severity::Info => tracing::info!(target: TARGET, code, "{text}"),
        Severity::Verbose => tracing::debug!(target: TARGET, code, "{text}"),
        Severity::Debug => tracing::trace!(target: TARGET, code, "{text}"),
    }
}
