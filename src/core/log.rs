//! Subscriber setup for the CLI

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const CRATE_TARGET: &str = "filmbudget";

/// Filter used when `RUST_LOG` is unset: run progress from this crate,
/// only warnings from dependencies such as reqwest or hyper.
fn default_directive(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    format!("warn,{CRATE_TARGET}={level}")
}

pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().compact().without_time().with_target(verbose))
        .with(filter)
        .init();
}
