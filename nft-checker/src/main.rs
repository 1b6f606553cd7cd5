use address_svc_client::AddressSvcClient;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use nft_checker::{batch, report, settings, TickerChecker};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let input_path = std::env::args()
        .nth(1)
        .context("usage: nft-checker <tickers.csv> [settings.toml]")?;
    let settings_file = std::env::args()
        .nth(2)
        .unwrap_or_else(|| settings::DEFAULT_SETTINGS_FILE.to_owned());
    let settings = settings::try_read_file_config(&settings_file, settings::ENV_PREFIX)
        .with_context(|| format!("unable to read config from {settings_file}"))?;

    let tickers = report::read_tickers(&input_path)?;
    tracing::info!(count = tickers.len(), input = %input_path, "processing tickers");

    let client = AddressSvcClient::with_base_urls(
        &settings.http,
        settings.symbol_base_url.as_str(),
        settings.address_base_url.as_str(),
    );
    let checker = TickerChecker::new(client);

    let bar = ProgressBar::new(tickers.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {eta}")?);

    let results = batch::classify_all(&checker, &tickers, |completed, _total| {
        bar.set_position(completed as u64);
    })
    .await;
    bar.finish_and_clear();

    report::write_results(&settings.output_path, &results)?;

    let nft = results.iter().filter(|r| r.is_nft).count();
    let failed = results.iter().filter(|r| !r.error.is_empty()).count();
    tracing::info!(
        total = results.len(),
        nft,
        failed,
        output = %settings.output_path,
        "processing complete"
    );

    Ok(())
}
