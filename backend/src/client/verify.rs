//! Smoke checks against a running deployment.
//!
//! The verifier probes the front page, one quote lookup and the readiness
//! probe, and grades each observation. It never retries; every request is
//! bounded by [`REQUEST_TIMEOUT`].

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

use super::error::ClientError;
use crate::USER_AGENT;
use crate::domain::ErrorCode;
use crate::inbound::http::envelope::StockResponse;

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Symbol used for the API check.
pub const PROBE_SYMBOL: &str = "AAPL";

const FRONTEND_MARKERS: [&str; 3] = ["Stock Price Calculator", "stock", "calculator"];

/// Severity of one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingLevel {
    /// Behaves as expected.
    Pass,
    /// Works but needs attention, such as a missing API key.
    Warn,
    /// Broken; the deployment is not usable.
    Fail,
}

impl FindingLevel {
    fn marker(self) -> &'static str {
        match self {
            Self::Pass => "[PASS]",
            Self::Warn => "[WARN]",
            Self::Fail => "[FAIL]",
        }
    }
}

/// One graded observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Severity.
    pub level: FindingLevel,
    /// Human-readable observation.
    pub message: String,
}

impl Finding {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            level: FindingLevel::Pass,
            message: message.into(),
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            level: FindingLevel::Warn,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            level: FindingLevel::Fail,
            message: message.into(),
        }
    }
}

/// Findings of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Check title as printed in the report.
    pub name: &'static str,
    /// Observations in the order they were made.
    pub findings: Vec<Finding>,
}

impl CheckReport {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            findings: Vec::new(),
        }
    }

    fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// `true` when no finding failed.
    pub fn passed(&self) -> bool {
        self.findings.iter().all(|f| f.level != FindingLevel::Fail)
    }

    /// Most severe level seen, `Pass` for an empty report.
    pub fn worst(&self) -> FindingLevel {
        self.findings
            .iter()
            .map(|f| f.level)
            .max()
            .unwrap_or(FindingLevel::Pass)
    }
}

/// All checks run against one deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Deployment root without a trailing slash.
    pub base_url: String,
    /// Frontend, API and readiness checks, in run order.
    pub checks: Vec<CheckReport>,
}

impl VerificationReport {
    /// `true` when every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckReport::passed)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Verifying deployment for: {}", self.base_url)?;
        for check in &self.checks {
            writeln!(f)?;
            writeln!(f, "{}", check.name)?;
            for finding in &check.findings {
                writeln!(f, "  {} {}", finding.level.marker(), finding.message)?;
            }
        }
        Ok(())
    }
}

/// Runs the deployment checks.
#[derive(Debug, Clone)]
pub struct DeploymentVerifier {
    client: Client,
    base_url: String,
}

impl DeploymentVerifier {
    /// Verifier for the deployment at `base_url`. One trailing slash is
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Setup`] when `base_url` is not an absolute
    /// `http(s)` URL or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url).to_owned();
        let parsed = reqwest::Url::parse(&base_url).map_err(|err| ClientError::Setup {
            message: format!("invalid deployment URL '{base_url}': {err}"),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Setup {
                message: format!("deployment URL '{base_url}' must use http or https"),
            });
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ClientError::Setup {
                message: err.to_string(),
            })?;
        Ok(Self { client, base_url })
    }

    /// Base URL without its trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run every check in order.
    pub async fn run(&self) -> VerificationReport {
        let checks = vec![
            self.verify_frontend().await,
            self.verify_api().await,
            self.verify_readiness().await,
        ];
        VerificationReport {
            base_url: self.base_url.clone(),
            checks,
        }
    }

    async fn get(&self, path: &str) -> Result<(StatusCode, String), reqwest::Error> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "verification request");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// Front page is served and looks like the calculator.
    pub async fn verify_frontend(&self) -> CheckReport {
        let mut report = CheckReport::new("Frontend");
        match self.get("/").await {
            Ok((StatusCode::OK, body)) => {
                report.push(Finding::pass("Frontend is accessible"));
                if FRONTEND_MARKERS.iter().any(|marker| body.contains(marker)) {
                    report.push(Finding::pass("Frontend content looks correct"));
                } else {
                    report.push(Finding::warn("Frontend content may not be correct"));
                }
            }
            Ok((status, _)) => report.push(Finding::fail(format!(
                "Frontend returned status code: {}",
                status.as_u16()
            ))),
            Err(err) => report.push(Finding::fail(format!(
                "Frontend verification failed: {err}"
            ))),
        }
        report
    }

    /// A lookup for [`PROBE_SYMBOL`] returns quote data.
    pub async fn verify_api(&self) -> CheckReport {
        let mut report = CheckReport::new("API");
        match self.get(&format!("/api/stock/{PROBE_SYMBOL}")).await {
            Ok((status, body)) => classify_api_response(&mut report, status, &body),
            Err(err) => report.push(Finding::fail(format!("API verification failed: {err}"))),
        }
        report
    }

    /// The readiness probe answers 200.
    pub async fn verify_readiness(&self) -> CheckReport {
        let mut report = CheckReport::new("Readiness");
        match self.get("/health/ready").await {
            Ok((StatusCode::OK, _)) => report.push(Finding::pass("Server reports ready")),
            Ok((StatusCode::SERVICE_UNAVAILABLE, _)) => {
                report.push(Finding::fail("Server is not ready yet"));
            }
            Ok((status, _)) => report.push(Finding::fail(format!(
                "Readiness probe returned status code: {}",
                status.as_u16()
            ))),
            Err(err) => report.push(Finding::fail(format!(
                "Readiness verification failed: {err}"
            ))),
        }
        report
    }
}

fn report_error_envelope(
    report: &mut CheckReport,
    level: FindingLevel,
    code: &str,
    message: &str,
) {
    report.push(Finding {
        level,
        message: format!("API returned error: {message}"),
    });
    if code == ErrorCode::ApiUnavailable.as_str() {
        report.push(Finding::warn(
            "This might indicate the Alpha Vantage API key is not configured",
        ));
    }
}

fn classify_api_response(report: &mut CheckReport, status: StatusCode, body: &str) {
    let envelope = serde_json::from_str::<StockResponse>(body).ok();

    if status == StatusCode::OK {
        report.push(Finding::pass("API is accessible"));
        match envelope {
            Some(StockResponse {
                success: true,
                data: Some(quote),
                ..
            }) => report.push(Finding::pass(format!(
                "API returns valid stock data: {} current ${:.2}, previous close ${:.2}, \
                 last updated {}",
                quote.symbol, quote.current_price, quote.previous_close, quote.last_updated
            ))),
            Some(StockResponse {
                error: Some(error), ..
            }) => {
                report_error_envelope(report, FindingLevel::Warn, &error.code, &error.message);
            }
            Some(_) => {
                report.push(Finding::warn("API response carries neither data nor error"));
            }
            None => report.push(Finding::warn("API response is not valid JSON")),
        }
        return;
    }

    if let Some(error) = envelope.and_then(|e| e.error) {
        report_error_envelope(report, FindingLevel::Fail, &error.code, &error.message);
        return;
    }

    let message = match status {
        StatusCode::NOT_FOUND => "API endpoint not found - check server deployment".to_owned(),
        StatusCode::INTERNAL_SERVER_ERROR => {
            "API internal server error - check server logs".to_owned()
        }
        other => format!("API returned status code: {}", other.as_u16()),
    };
    report.push(Finding::fail(message));
}
