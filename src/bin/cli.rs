// src/bin/cli.rs
use ggj_scrape::cli;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().await
}
