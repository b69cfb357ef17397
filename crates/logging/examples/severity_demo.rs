//! Exercises the routing presets against the process's standard streams.
//!
//! Run with `cargo run --example severity_demo`; errors and warnings land on
//! stderr, everything else on stdout.

use logging::{DiagnosticLog, SeverityFlags};

fn main() {
    let mut log = DiagnosticLog::stdio();

    log.configure(SeverityFlags::ALL);
    log.info_msg("demo starting");
    logging::info_msg_fmt!(log, "formatted value {}", 42);
    log.verbose_msg("verbose detail");
    log.debug_code(3, "state dump");
    log.warn_code(7, "recoverable condition");
    log.report_os_error(0);

    log.configure(SeverityFlags::TERSE);
    log.debug_msg("dropped after reconfigure");
    log.error_msg("still routed");

    log.reset();
    log.info_msg("dropped after reset");
}
