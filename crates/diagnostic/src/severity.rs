use std::fmt;
use std::str::FromStr;

/// Output channel a diagnostic line is written to.
///
/// The subsystem writes to exactly two destinations: the standard channel
/// (conventionally the process's standard output stream) and the error
/// channel (conventionally the diagnostic/error stream). Which channel a
/// line lands on is decided by its [`Severity`], not by the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// The standard output channel.
    Standard,
    /// The error output channel.
    Error,
}

impl Channel {
    /// Returns the lowercase name of the channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a diagnostic line.
///
/// The five severities are independent: enabling one says nothing about the
/// others, and the routing layer treats them as individual bit flags rather
/// than an ordered threshold.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Error message.
    Error,
    /// Warning message.
    Warning,
    /// Informational message.
    Info,
    /// Verbose progress message.
    Verbose,
    /// Debugging message.
    Debug,
}

impl Severity {
    /// Every severity, in routing order.
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Verbose,
        Self::Debug,
    ];

    /// Returns the lowercase label rendered at the start of each line.
    ///
    /// The labels feed directly into [`Diagnostic`](crate::Diagnostic)
    /// rendering, so external crates never duplicate the canonical wording
    /// when building structured assertions or parsing captured output.
    ///
    /// # Examples
    ///
    /// ```
    /// use diagnostic::Severity;
    ///
    /// assert_eq!(Severity::Error.as_str(), "error");
    /// assert_eq!(Severity::Warning.as_str(), "warning");
    /// assert_eq!(Severity::Verbose.as_str(), "verbose");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
        }
    }

    /// Returns the channel this severity is conventionally bound to.
    ///
    /// Errors and warnings belong on the error channel; informational,
    /// verbose, and debugging output belongs on the standard channel. The
    /// binding is fixed: enabling a severity always routes it here.
    ///
    /// # Examples
    ///
    /// ```
    /// use diagnostic::{Channel, Severity};
    ///
    /// assert_eq!(Severity::Error.channel(), Channel::Error);
    /// assert_eq!(Severity::Warning.channel(), Channel::Error);
    /// assert_eq!(Severity::Info.channel(), Channel::Standard);
    /// assert_eq!(Severity::Debug.channel(), Channel::Standard);
    /// ```
    #[must_use]
    pub const fn channel(self) -> Channel {
        match self {
            Self::Error | Self::Warning => Channel::Error,
            Self::Info | Self::Verbose | Self::Debug => Channel::Standard,
        }
    }

    /// Reports whether this severity is [`Severity::Error`].
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Reports whether this severity is [`Severity::Warning`].
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::Warning)
    }

    /// Reports whether this severity is [`Severity::Info`].
    #[must_use]
    pub const fn is_info(self) -> bool {
        matches!(self, Self::Info)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised diagnostic severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "verbose" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}
