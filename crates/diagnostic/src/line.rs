use std::fmt;
use std::io::{self, Write};

use crate::severity::{Channel, Severity};

/// A single diagnostic line awaiting emission.
///
/// The text is borrowed for the duration of the call that renders it; the
/// subsystem never copies or retains caller-owned message text. An optional
/// numeric code turns the plain shape `"<label>: <message>"` into the
/// code-annotated shape `"<label>: <code>: <message>"`.
///
/// # Examples
///
/// ```
/// use diagnostic::{Diagnostic, Severity};
///
/// let plain = Diagnostic::new(Severity::Warning, "lost frame");
/// assert_eq!(plain.to_string(), "warning: lost frame");
///
/// let coded = Diagnostic::error(5, "bad handle");
/// assert_eq!(coded.to_string(), "error: 5: bad handle");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Diagnostic<'a> {
    severity: Severity,
    code: Option<i32>,
    text: &'a str,
}

impl<'a> Diagnostic<'a> {
    /// Creates a plain diagnostic with the provided severity and text.
    #[inline]
    #[must_use = "constructed diagnostics must be rendered to reach users"]
    pub const fn new(severity: Severity, text: &'a str) -> Self {
        Self {
            severity,
            code: None,
            text,
        }
    }

    /// Attaches a numeric code, selecting the code-annotated line shape.
    #[inline]
    #[must_use = "constructed diagnostics must be rendered to reach users"]
    pub const fn with_code(self, code: i32) -> Self {
        Self {
            code: Some(code),
            ..self
        }
    }

    /// Creates an error diagnostic with the provided code.
    #[inline]
    #[must_use = "constructed diagnostics must be rendered to reach users"]
    pub const fn error(code: i32, text: &'a str) -> Self {
        Self::new(Severity::Error, text).with_code(code)
    }

    /// Creates a warning diagnostic.
    #[inline]
    #[must_use = "constructed diagnostics must be rendered to reach users"]
    pub const fn warning(text: &'a str) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Creates an informational diagnostic.
    #[inline]
    #[must_use = "constructed diagnostics must be rendered to reach users"]
    pub const fn info(text: &'a str) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Returns the severity of the line.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the numeric code, if the line carries one.
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    /// Returns the borrowed message text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the channel the line's severity is conventionally bound to.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.severity.channel()
    }

    /// Renders the line into `writer` without a trailing newline.
    pub fn render_to_writer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Renders the line into `writer` followed by a newline.
    pub fn render_line_to_writer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}: {}: {}", self.severity.as_str(), code, self.text),
            None => write!(f, "{}: {}", self.severity.as_str(), self.text),
        }
    }
}
