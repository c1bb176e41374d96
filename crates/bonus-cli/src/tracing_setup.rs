//! Logging setup
//!
//! Logs go to stderr so stdout only ever carries the rendered result.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "bonus_cli=info,bonus_calculator=info,warn";
const VERBOSE_FILTER: &str = "bonus_cli=debug,bonus_calculator=debug,info";

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool, json: bool) -> anyhow::Result<()> {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if json { builder.json().try_init() } else { builder.try_init() };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
