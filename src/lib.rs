pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;

use anyhow::{Context, Result};
use cli::Cli;
use data::{
    cache::ResponseCache,
    forecast::ForecastClient,
    notify::{Destination, Notifier},
};
use domain::registry::LocationRegistry;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run(cli: Cli) -> Result<()> {
    run_to(cli, &mut std::io::stdout()).await
}

/// Runs one competition; a report without a webhook is printed to `out`.
pub async fn run_to(cli: Cli, out: &mut impl std::io::Write) -> Result<()> {
    let registry = match &cli.locations {
        Some(path) => LocationRegistry::load(path)?,
        None => LocationRegistry::default(),
    };

    let cache = cli.use_cache.then(|| ResponseCache::new(&cli.cache_dir));
    let source = ForecastClient::with_base_url(&cli.forecast_url, &cli.api_key)?.with_cache(cache);
    let notifier = Notifier::new(Destination::from_webhook(&cli.webhook))?;

    let message = app::competition::run_competition(&registry, &source)
        .await
        .context("weather competition aborted")?
        .with_channel(cli.channel);

    notifier
        .send_to(&message, out)
        .await
        .context("delivering report failed")
}
