mod config;
mod platform;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::from_env().context("reading JOBWATCH_* environment")?;
    jobwatch_logging::init(config.log_destination, log::LevelFilter::Info);
    platform::run_app(config)
}
