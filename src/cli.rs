use std::path::PathBuf;

use clap::Parser;

use crate::data::forecast::FORECAST_URL;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "best-weather",
    version,
    about = "Ranks places by today's forecast and posts the results to a chat webhook"
)]
pub struct Cli {
    /// Webhook URL for a slack channel (prints to stdout when empty)
    #[arg(long, env = "BEST_WEATHER_WEBHOOK", default_value = "")]
    pub webhook: String,

    /// Cache the results from the weather service (for testing)
    #[arg(short = 'c', long = "cache")]
    pub use_cache: bool,

    /// Directory holding cached forecast responses
    #[arg(long, default_value = "cache")]
    pub cache_dir: PathBuf,

    /// Forecast API key
    #[arg(long, env = "FORECAST_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Forecast API base URL
    #[arg(long, default_value = FORECAST_URL)]
    pub forecast_url: String,

    /// JSON file listing the competing locations (built-in list when absent)
    #[arg(long)]
    pub locations: Option<PathBuf>,

    /// Post to this channel instead of the webhook's default
    #[arg(long)]
    pub channel: Option<String>,
}
