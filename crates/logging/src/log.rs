//! crates/logging/src/log.rs
//! The owned diagnostic-log context: routing state plus the two channels.

use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

use diagnostic::{Channel, Diagnostic, MAX_LENGTH, Severity, measure, reserve_exact, substitute};

use crate::flags::SeverityFlags;
use crate::routing::RoutingConfig;

/// Description emitted for the zero/no-error sentinel code.
const UNKNOWN_ERROR: &str = "Unknown error";

/// A leveled diagnostic log routing severities across two channels.
///
/// The log owns its [`RoutingConfig`] together with the standard and error
/// channel writers, keeping all state in one value so independent instances
/// coexist (tests capture into byte buffers, applications bind the process
/// streams through [`stdio`](Self::stdio)). Every entry point re-reads the
/// routing state, so [`configure`](Self::configure) and
/// [`reset`](Self::reset) take effect for the very next call.
///
/// Entry points return nothing: a disabled severity is silently dropped and
/// channel write failures are deliberately not surfaced. The log reports its
/// own internal allocation faults through its error severity path.
///
/// Sharing one log across threads requires external synchronisation; every
/// emitting method takes `&mut self`.
///
/// # Examples
///
/// ```
/// use logging::{DiagnosticLog, SeverityFlags};
///
/// let mut log = DiagnosticLog::new(Vec::new(), Vec::new());
/// log.configure(SeverityFlags::TERSE);
///
/// log.info_msg("starting");
/// log.warn_msg("dropped");
/// log.error_code(5, "bad");
///
/// let (standard, error, _) = log.into_parts();
/// assert_eq!(standard, b"info: starting\n");
/// assert_eq!(error, b"error: 5: bad\n");
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticLog<O, E> {
    routing: RoutingConfig,
    standard: O,
    error: E,
}

impl DiagnosticLog<Stdout, Stderr> {
    /// Creates a log bound to the process's standard and error streams.
    ///
    /// All severities start disabled; call [`configure`](Self::configure) to
    /// enable a set.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O, E> DiagnosticLog<O, E> {
    /// Creates a log over the given channel writers, disabled for all
    /// severities.
    #[must_use]
    pub fn new(standard: O, error: E) -> Self {
        Self {
            routing: RoutingConfig::new(),
            standard,
            error,
        }
    }

    /// Creates a log over the given channel writers with `flags` already
    /// configured.
    #[must_use]
    pub fn with_flags(standard: O, error: E, flags: SeverityFlags) -> Self {
        let mut log = Self::new(standard, error);
        log.configure(flags);
        log
    }

    /// Re-derives the routing state from `flags`; severities absent from the
    /// set are disabled. See [`RoutingConfig::configure`].
    pub fn configure(&mut self, flags: SeverityFlags) {
        self.routing.configure(flags);
    }

    /// Disables every severity.
    pub fn reset(&mut self) {
        self.routing.reset();
    }

    /// Borrows the current routing state.
    #[must_use]
    pub const fn routing(&self) -> &RoutingConfig {
        &self.routing
    }

    /// Reports whether the severity currently reaches a channel.
    #[must_use]
    pub const fn is_enabled(&self, severity: Severity) -> bool {
        self.routing.is_enabled(severity)
    }

    /// Borrows the standard channel writer.
    #[must_use]
    pub const fn standard_channel(&self) -> &O {
        &self.standard
    }

    /// Borrows the error channel writer.
    #[must_use]
    pub const fn error_channel(&self) -> &E {
        &self.error
    }

    /// Consumes the log and returns the two writers and the routing state.
    #[must_use]
    pub fn into_parts(self) -> (O, E, RoutingConfig) {
        (self.standard, self.error, self.routing)
    }
}

impl<O: Write, E: Write> DiagnosticLog<O, E> {
    /// Emits an error message verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{DiagnosticLog, SeverityFlags};
    ///
    /// let mut log = DiagnosticLog::with_flags(Vec::new(), Vec::new(), SeverityFlags::ALL);
    /// log.error_msg("lost context");
    /// let (_, error, _) = log.into_parts();
    /// assert_eq!(error, b"error: lost context\n");
    /// ```
    pub fn error_msg(&mut self, text: &str) {
        self.emit(Severity::Error, None, Some(text));
    }

    /// Emits an error message annotated with a numeric code.
    pub fn error_code(&mut self, code: i32, text: &str) {
        self.emit(Severity::Error, Some(code), Some(text));
    }

    /// Builds and emits a formatted error message.
    ///
    /// Call sites usually go through the [`error_msg_fmt!`](crate::error_msg_fmt)
    /// macro rather than spelling out `format_args!` themselves.
    pub fn error_msg_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Error, None, args);
    }

    /// Builds and emits a formatted, code-annotated error message.
    pub fn error_code_fmt(&mut self, code: i32, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Error, Some(code), args);
    }

    /// Emits a warning message verbatim.
    pub fn warn_msg(&mut self, text: &str) {
        self.emit(Severity::Warning, None, Some(text));
    }

    /// Emits a warning message annotated with a numeric code.
    pub fn warn_code(&mut self, code: i32, text: &str) {
        self.emit(Severity::Warning, Some(code), Some(text));
    }

    /// Builds and emits a formatted warning message.
    pub fn warn_msg_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Warning, None, args);
    }

    /// Builds and emits a formatted, code-annotated warning message.
    pub fn warn_code_fmt(&mut self, code: i32, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Warning, Some(code), args);
    }

    /// Emits an informational message verbatim.
    pub fn info_msg(&mut self, text: &str) {
        self.emit(Severity::Info, None, Some(text));
    }

    /// Emits an informational message annotated with a numeric code.
    pub fn info_code(&mut self, code: i32, text: &str) {
        self.emit(Severity::Info, Some(code), Some(text));
    }

    /// Builds and emits a formatted informational message.
    pub fn info_msg_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Info, None, args);
    }

    /// Builds and emits a formatted, code-annotated informational message.
    pub fn info_code_fmt(&mut self, code: i32, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Info, Some(code), args);
    }

    /// Emits a verbose message verbatim.
    pub fn verbose_msg(&mut self, text: &str) {
        self.emit(Severity::Verbose, None, Some(text));
    }

    /// Emits a verbose message annotated with a numeric code.
    pub fn verbose_code(&mut self, code: i32, text: &str) {
        self.emit(Severity::Verbose, Some(code), Some(text));
    }

    /// Builds and emits a formatted verbose message.
    pub fn verbose_msg_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Verbose, None, args);
    }

    /// Builds and emits a formatted, code-annotated verbose message.
    pub fn verbose_code_fmt(&mut self, code: i32, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Verbose, Some(code), args);
    }

    /// Emits a debugging message verbatim.
    pub fn debug_msg(&mut self, text: &str) {
        self.emit(Severity::Debug, None, Some(text));
    }

    /// Emits a debugging message annotated with a numeric code.
    pub fn debug_code(&mut self, code: i32, text: &str) {
        self.emit(Severity::Debug, Some(code), Some(text));
    }

    /// Builds and emits a formatted debugging message.
    pub fn debug_msg_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Debug, None, args);
    }

    /// Builds and emits a formatted, code-annotated debugging message.
    pub fn debug_code_fmt(&mut self, code: i32, args: fmt::Arguments<'_>) {
        self.emit_fmt(Severity::Debug, Some(code), args);
    }

    /// Reports a platform error code with its human-readable description.
    ///
    /// The zero sentinel maps to `"Unknown error"`; any other code is
    /// described by the platform. The line goes through the error severity
    /// path, so it is dropped whenever errors are disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{DiagnosticLog, SeverityFlags};
    ///
    /// let mut log = DiagnosticLog::with_flags(Vec::new(), Vec::new(), SeverityFlags::ALL);
    /// log.report_os_error(0);
    /// let (_, error, _) = log.into_parts();
    /// assert_eq!(error, b"error: 0: Unknown error\n");
    /// ```
    pub fn report_os_error(&mut self, code: i32) {
        let description = os_error_description(code);
        self.error_code(code, &description);
    }

    /// Flushes both channel writers.
    pub fn flush(&mut self) -> io::Result<()> {
        self.standard.flush()?;
        self.error.flush()
    }

    /// Writes one line to the severity's bound channel.
    ///
    /// A disabled severity leaves both channels untouched. A missing text is
    /// "nothing to emit" (the degraded formatted path) and is skipped the
    /// same way. The write result is discarded.
    fn emit(&mut self, severity: Severity, code: Option<i32>, text: Option<&str>) {
        let Some(text) = text else { return };
        let Some(channel) = self.routing.get(severity) else {
            return;
        };

        let mut line = Diagnostic::new(severity, text);
        if let Some(code) = code {
            line = line.with_code(code);
        }
        let _ = match channel {
            Channel::Standard => line.render_line_to_writer(&mut self.standard),
            Channel::Error => line.render_line_to_writer(&mut self.error),
        };

        #[cfg(feature = "tracing")]
        crate::tracing_bridge::forward(severity, code, text);
    }

    /// Builds the formatted text, then emits it; the buffer is dropped on
    /// every path once emission has been attempted.
    fn emit_fmt(&mut self, severity: Severity, code: Option<i32>, args: fmt::Arguments<'_>) {
        let built = self.build_formatted(args);
        self.emit(severity, code, built.as_deref());
    }

    /// Two-pass formatted construction: measure, range-check, allocate,
    /// substitute.
    ///
    /// A length that cannot be represented as a buffer size is self-reported
    /// with the platform's range-error code and clamped; an allocation
    /// failure is self-reported with the platform's out-of-memory code and
    /// yields no message, which skips the enclosing emission.
    fn build_formatted(&mut self, args: fmt::Arguments<'_>) -> Option<String> {
        let mut length = measure(args);
        if length > MAX_LENGTH {
            self.report_os_error(libc::ERANGE);
            length = MAX_LENGTH;
        }

        let mut buffer = match reserve_exact(length) {
            Ok(buffer) => buffer,
            Err(_) => {
                self.report_os_error(libc::ENOMEM);
                return None;
            }
        };

        substitute(&mut buffer, args);
        Some(buffer)
    }
}

/// Returns the platform's description for an OS error code.
fn os_error_description(code: i32) -> String {
    if code == 0 {
        return UNKNOWN_ERROR.to_string();
    }
    let rendered = io::Error::from_raw_os_error(code).to_string();
    // io::Error renders "<description> (os error N)"; only the description
    // belongs on the diagnostic line.
    match rendered.rfind(" (os error ") {
        Some(start) => rendered[..start].to_string(),
        None => rendered,
    }
}
