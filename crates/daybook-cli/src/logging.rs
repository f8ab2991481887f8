//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with command output. `DAYBOOK_LOG`
//! takes a full filter directive and wins over `-v`.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DAYBOOK_LOG";

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
