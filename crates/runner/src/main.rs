//! Muster - unit creation demo
//!
//! This crate is the *composition root*: it loads configuration, sets up
//! logging, and musters one unit from a faction id and a unit type id.
//!
//! ```text
//! muster 0 1          # England, archer
//! echo "1 2" | muster # France, knight
//! ```

mod config;
mod run;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` is unset. The target is this binary's crate name.
const DEFAULT_LOG_FILTER: &str = concat!(env!("CARGO_CRATE_NAME"), "=info");

fn main() -> anyhow::Result<()> {
    config::load_dotenv_from_repo_root();
    let config = config::RunnerConfig::from_env()?;

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Muster");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    run::run(&config, &args, stdin.lock(), &mut stdout)
}
