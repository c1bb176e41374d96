use anyhow::Context;
use bonus_cli::Cli;
use bonus_cli::tracing_setup::init_tracing;
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting bonus calculator");

    let config = cli.load_config().context("failed to load configuration")?;
    let output = cli.execute(&config)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
