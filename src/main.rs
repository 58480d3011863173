use anyhow::Context;
use clap::Parser;
use visionbi::cli::Cli;
use visionbi::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config_path();
    let mut config = Config::load_from(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    visionbi::logging::init_tracing(&config.logging).context("failed to initialize logging")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %path.display(),
        "starting visionbi"
    );

    visionbi::ui::run(&config).context("terminal UI failed")?;
    Ok(())
}
