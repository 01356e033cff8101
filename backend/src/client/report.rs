//! Plain-text rendering of a quote and its price targets.

use std::fmt;

use serde::Serialize;

use crate::domain::{PriceTargets, Quote, TargetLadder};

/// A quote together with the targets derived from its previous close.
///
/// # Examples
/// ```
/// use stock_calculator::client::QuoteReport;
/// use stock_calculator::domain::Quote;
///
/// let report = QuoteReport::new(Quote {
///     symbol: "AAPL".into(),
///     current_price: 150.01,
///     previous_close: 100.0,
///     last_updated: "2024-05-17".into(),
/// });
/// assert_eq!(report.targets().gains.prices(), [105.0, 110.0, 115.0]);
/// assert!(report.to_string().contains("-15%  $85.00"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteReport {
    quote: Quote,
    targets: PriceTargets,
}

impl QuoteReport {
    /// Derive the targets from `quote.previous_close`.
    pub fn new(quote: Quote) -> Self {
        let targets = PriceTargets::from_previous_close(quote.previous_close);
        Self { quote, targets }
    }

    /// Quote the report was built from.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Gain and loss targets from the previous close.
    pub fn targets(&self) -> &PriceTargets {
        &self.targets
    }
}

fn write_ladder(f: &mut fmt::Formatter<'_>, title: &str, ladder: &TargetLadder) -> fmt::Result {
    writeln!(f, "{title}")?;
    for target in ladder.iter() {
        writeln!(f, "  {:<5} ${:.2}", target.label(), target.price)?;
    }
    Ok(())
}

impl fmt::Display for QuoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.quote.symbol)?;
        writeln!(f, "Current: ${:.2}", self.quote.current_price)?;
        writeln!(f, "Previous Close: ${:.2}", self.quote.previous_close)?;
        writeln!(f, "Last Updated: {}", self.quote.last_updated)?;
        writeln!(f)?;
        write_ladder(f, "Gain targets", &self.targets.gains)?;
        writeln!(f)?;
        write_ladder(f, "Loss targets", &self.targets.losses)
    }
}
