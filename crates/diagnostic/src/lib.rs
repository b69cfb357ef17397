#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `diagnostic` provides the message model shared by the leveled logging
//! workspace: the five-severity taxonomy, the two output channels each
//! severity is conventionally bound to, the borrowed [`Diagnostic`] line with
//! its bit-exact rendering, and the dry-run measurement primitives used to
//! size formatted-message allocations before any bytes are written.
//!
//! # Design
//!
//! The crate deliberately owns no I/O state. A [`Diagnostic`] borrows its
//! text and renders into any [`io::Write`](std::io::Write) implementor, so
//! the routing layer above decides where lines go and tests capture output in
//! plain byte buffers. Formatted construction is split into its mechanical
//! pieces ([`measure`], [`reserve_exact`], [`substitute`]) so the caller can
//! interleave its own recovery reporting between the measurement and
//! allocation steps.
//!
//! # Invariants
//!
//! - Rendered lines are exactly `"<label>: <message>"` or
//!   `"<label>: <code>: <message>"`, with lowercase labels and nothing else.
//! - Plain message text is borrowed, never copied.
//! - The measurement pass writes no bytes and never fails; its count
//!   saturates instead of overflowing.
//!
//! # Examples
//!
//! Render one line of each shape into a byte buffer:
//!
//! ```
//! use diagnostic::{Diagnostic, Severity};
//!
//! let mut buffer = Vec::new();
//! Diagnostic::new(Severity::Info, "ready").render_line_to_writer(&mut buffer)?;
//! Diagnostic::error(5, "bad").render_line_to_writer(&mut buffer)?;
//!
//! let output = String::from_utf8(buffer).unwrap();
//! assert_eq!(output, "info: ready\nerror: 5: bad\n");
//! # Ok::<(), std::io::Error>(())
//! ```

mod line;
mod measure;
mod severity;

pub use line::Diagnostic;
pub use measure::{MAX_LENGTH, measure, reserve_exact, substitute};
pub use severity::{Channel, ParseSeverityError, Severity};
