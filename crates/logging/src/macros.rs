//! crates/logging/src/macros.rs
//! Formatted-emission convenience macros over the `DiagnosticLog` entry
//! points. Each macro wraps `format_args!` so call sites pass a format
//! template and arguments directly.

/// Builds and emits a formatted error message: `error_msg_fmt!(log, "read {} bytes", n)`.
#[macro_export]
macro_rules! error_msg_fmt {
    ($log:expr, $($arg:tt)*) => {
        $log.error_msg_fmt(::std::format_args!($($arg)*))
    };
}

/// Builds and emits a formatted, code-annotated error message.
#[macro_export]
macro_rules! error_code_fmt {
    ($log:expr, $code:expr, $($arg:tt)*) => {
        $log.error_code_fmt($code, ::std::format_args!($($arg)*))
    };
}

/// Builds and emits a formatted warning message.
#[macro_export]
macro_rules! warn_msg_fmt {
    ($log:expr, $($arg:tt)*) => {
        $log.warn_msg_fmt(::std::format_args!($($arg)*))
    };
}

/// Builds and emits a formatted, code-annotated warning message.
#[macro_export]
macro_rules! warn_code_fmt {
    ($log:expr, $code:expr, $($arg:tt)*) => {
        $log.warn_code_fmt($code, ::std::format_args!($($arg)*))
    };
}

/// Builds and emits a formatted informational message.
#[macro_export]
macro_rules! info_msg_fmt {
    ($log:expr, $($arg:tt)*) => {
        $log.info_msg_fmt(::std::format_args!($($arg)*))
    };
}

/// Builds and emits a formatted, code-annotated informational message.
#[macro_export]
macro_rules! info_code_fmt {
    ($log:expr, $code:expr, $($arg:tt)*) => {
        $log.info_code_fmt($code, ::std::format_args!($($arg)*))
    };
}

/// Builds and emits a formatted verbose message.
#[macro_export]
macro_rules! verbose_msg_fmt {
    ($log:expr, $($arg:tt)*) => {
        $log.verbose_msg_fmt(::std::format_args!($($arg)*))
    };
}

/// Builds and emits a formatted, code-annotated verbose message.
#[macro_export]
macro_rules! verbose_code_fmt {
    ($log:expr, $code:expr, $($arg:tt)*) => {
        $log.verbose_code_fmt($code, ::std::format_args!($($arg)*))
    };
}

/// Builds and emits a formatted debugging message.
#[macro_export]
macro_rules! debug_msg_fmt {
    ($log:expr, $($arg:tt)*) => {
        $log.debug_msg_fmt(::std::format_args!($($arg)*))
    };
}

/// Builds and emits a formatted, code-annotated debugging message.
#[macro_export]
macro_rules! debug_code_fmt {
    ($log:expr, $code:expr, $($arg:tt)*) => {
        $log.debug_code_fmt($code, ::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use crate::{DiagnosticLog, SeverityFlags};

    #[test]
    fn macros_expand_to_the_matching_entry_points() {
        let mut log = DiagnosticLog::with_flags(Vec::new(), Vec::new(), SeverityFlags::ALL);

        crate::error_msg_fmt!(log, "e {}", 1);
        crate::error_code_fmt!(log, 10, "e {}", 2);
        crate::warn_msg_fmt!(log, "w {}", 3);
        crate::warn_code_fmt!(log, 11, "w {}", 4);
        crate::info_msg_fmt!(log, "i {}", 5);
        crate::info_code_fmt!(log, 12, "i {}", 6);
        crate::verbose_msg_fmt!(log, "v {}", 7);
        crate::verbose_code_fmt!(log, 13, "v {}", 8);
        crate::debug_msg_fmt!(log, "d {}", 9);
        crate::debug_code_fmt!(log, 14, "d {}", 10);

        let (standard, error, _) = log.into_parts();
        let standard = String::from_utf8(standard).expect("utf-8");
        let error = String::from_utf8(error).expect("utf-8");

        assert_eq!(
            standard,
            "info: i 5\ninfo: 12: i 6\nverbose: v 7\nverbose: 13: v 8\ndebug: d 9\ndebug: 14: d 10\n"
        );
        assert_eq!(
            error,
            "error: e 1\nerror: 10: e 2\nwarning: w 3\nwarning: 11: w 4\n"
        );
    }

    #[test]
    fn macros_accept_plain_string_templates() {
        let mut log = DiagnosticLog::with_flags(Vec::new(), Vec::new(), SeverityFlags::ALL);
        crate::info_msg_fmt!(log, "no substitutions");

        let (standard, _, _) = log.into_parts();
        assert_eq!(standard, b"info: no substitutions\n");
    }
}
