use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use config::RegistryConfig;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = RegistryConfig::load(cli.config.as_deref())?.with_database(cli.database);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(&config.log_filter)
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    commands::run_command(cli.command, cli.format, &config, &mut stdout)
}
