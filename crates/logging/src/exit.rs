//! crates/logging/src/exit.rs
//! Process-termination primitive for fatal conditions.

use std::process;

/// Exit status reported to the host environment by [`fatal`].
pub const FAILURE_STATUS: i32 = 1;

/// Ends the process with a failure status.
///
/// Callers log the fatal condition first; this function produces no output
/// of its own and never returns.
pub fn fatal() -> ! {
    process::exit(FAILURE_STATUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_status_is_nonzero() {
        assert_ne!(FAILURE_STATUS, 0);
    }
}
