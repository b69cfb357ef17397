#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the leveled diagnostic log: process diagnostics are tagged
//! with one of five independent severities (error, warning, info, verbose,
//! debug), routed through a configurable [`RoutingConfig`], and written as
//! single lines to one of two channels. Errors and warnings land on the
//! error channel, everything else on the standard channel;
//! [`DiagnosticLog::stdio`] binds those to the process's stderr and stdout.
//!
//! # Design
//!
//! All state lives in an owned [`DiagnosticLog`] value rather than a process
//! global, so tests and multi-instance embedders construct independent logs
//! over any [`io::Write`](std::io::Write) channels. The twenty entry points
//! (five severities, each with plain, code-annotated, formatted, and
//! formatted-with-code shapes) funnel through one shared emission path and
//! one shared two-pass formatted builder; the per-severity methods are thin
//! wrappers, and the `*_fmt!` macros wrap `format_args!` for call-site
//! ergonomics.
//!
//! # Invariants
//!
//! - A disabled severity produces zero bytes on either channel.
//! - Output is bit-exact: `"<label>: <message>\n"` or
//!   `"<label>: <code>: <message>\n"`, nothing else.
//! - [`configure`](DiagnosticLog::configure) fully replaces the routing
//!   state; [`reset`](DiagnosticLog::reset) disables everything. Both take
//!   effect for the very next call.
//! - Formatted buffers are sized by a dry-run measurement pass before any
//!   byte is written, and dropped immediately after emission.
//!
//! # Errors
//!
//! Logging entry points return no status. The log reports its own
//! allocation faults through its error severity path (range overflows are
//! clamped and reported, allocation failures skip the emission), and channel
//! write failures are deliberately not detected. The only operation visible
//! to the process environment is [`fatal`], which callers invoke themselves
//! after logging a fatal condition.
//!
//! # Examples
//!
//! Route a terse configuration into capture buffers:
//!
//! ```
//! use logging::{DiagnosticLog, SeverityFlags};
//!
//! let mut log = DiagnosticLog::new(Vec::new(), Vec::new());
//! log.configure(SeverityFlags::ERROR | SeverityFlags::INFO);
//!
//! log.info_msg("starting");
//! log.debug_msg("dropped");
//! logging::error_code_fmt!(log, 5, "bad handle {}", 3);
//!
//! let (standard, error, _) = log.into_parts();
//! assert_eq!(standard, b"info: starting\n");
//! assert_eq!(error, b"error: 5: bad handle 3\n");
//! ```

mod exit;
mod flags;
mod log;
mod macros;
mod routing;
#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use diagnostic::{Channel, Diagnostic, ParseSeverityError, Severity};
pub use exit::{FAILURE_STATUS, fatal};
pub use flags::SeverityFlags;
pub use log::DiagnosticLog;
pub use routing::RoutingConfig;
