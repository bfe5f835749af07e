//! Log output setup.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `SHIFTCAL_LOG` takes an `EnvFilter` directive (e.g. `debug`,
//! `shiftcal_core=trace`); the default is `warn`.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_env("SHIFTCAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
