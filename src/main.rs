use anyhow::Result;
use best_weather::cli::Cli;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    best_weather::init_tracing();
    best_weather::run(cli).await
}
