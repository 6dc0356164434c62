use anyhow::Context;
use clap::Parser;

mod cli;

use cli::Cli;
use zaplanje_press::{App, Config};

fn main() -> anyhow::Result<()> {
    // Initialize logging (only show warnings and errors by default)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let mut app = App::from_config(&config).context("failed to load seed articles")?;

    let mut stdout = std::io::stdout().lock();
    cli::run(cli.command, &mut app, &mut stdout)
}
