//! CLI command definitions and process-level setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use tracing_subscriber::EnvFilter;

use mcprofile::config::Config;

use args::Cli;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` flags pick the level.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "mcprofile=debug,warn",
        _ => "mcprofile=trace,warn",
    }
}

/// Apply the global CLI flags on top of the loaded config.
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref base_url) = cli.base_url {
        config.service.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.service.timeout_secs = Some(timeout);
    }
}
