//! Log output setup
//!
//! The library crates log through the `log` facade; this installs a
//! `tracing-subscriber` formatter on stderr that also picks up those records.

use crate::cli::GlobalArgs;
use tracing_subscriber::EnvFilter;

fn level(global: &GlobalArgs) -> &'static str {
    if global.verbose {
        "debug"
    } else if global.quiet {
        "warn"
    } else {
        "info"
    }
}

pub fn init(global: &GlobalArgs) {
    let filter = EnvFilter::new(level(global));

    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
