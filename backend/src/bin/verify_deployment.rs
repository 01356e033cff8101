//! Smoke-check a running stock calculator deployment.
//!
//! Exits non-zero when any check fails; warnings alone do not fail the run.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use stock_calculator::client::DeploymentVerifier;
use tokio::runtime::Builder;

/// `verify-deployment` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "verify-deployment",
    about = "Check the front page, a quote lookup and the readiness probe of a deployment",
    version
)]
struct CliArgs {
    /// Deployment base URL, for example `https://calc.example.com`.
    url: String,
    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

const TROUBLESHOOTING: &str = "\
If you see any issues:
1. Check the server logs for the request trace id
2. Verify ALPHA_VANTAGE_API_KEY is set in the server environment
3. Confirm /health/ready answers 200 from inside the deployment";

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
    let verifier = DeploymentVerifier::new(&args.url).context("invalid deployment URL")?;
    let report = verifier.run().await;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialise report")?
        );
    } else {
        print!("{report}");
        println!();
        println!("Deployment verification complete");
        if !report.passed() {
            println!();
            println!("{TROUBLESHOOTING}");
        }
    }

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
