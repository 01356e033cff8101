//! Look up one quote and print it with its price targets.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use reqwest::Url;
use stock_calculator::client::{QuoteReport, StockApiClient, prepare_symbol};
use tokio::runtime::Builder;

/// `stock-lookup` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stock-lookup",
    about = "Fetch a stock quote and show gain and loss targets from the previous close",
    version
)]
struct CliArgs {
    /// Ticker to look up; filtered to at most five letters.
    symbol: String,
    /// Base URL of the stock calculator deployment.
    #[arg(
        long = "base-url",
        value_name = "url",
        env = "STOCK_API_BASE_URL",
        default_value = "http://127.0.0.1:8080/"
    )]
    base_url: Url,
    /// Print the quote and targets as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("create Tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<ExitCode> {
    let symbol = match prepare_symbol(&args.symbol) {
        Ok(symbol) => symbol,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    let client = StockApiClient::new(args.base_url).context("build HTTP client")?;
    match client.fetch_quote(&symbol).await {
        Ok(quote) => {
            let report = QuoteReport::new(quote);
            if args.json {
                let json = serde_json::to_string_pretty(&report).context("serialise report")?;
                println!("{json}");
            } else {
                print!("{report}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            eprintln!("({err})");
            Ok(ExitCode::FAILURE)
        }
    }
}
