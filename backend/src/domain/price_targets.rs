//! Percentage price targets derived from the previous close.
//!
//! Targets are recomputed on every render and never stored.

use std::fmt;

use serde::Serialize;

use super::price::round_to_cents;

/// Percentage offsets applied on both sides of the previous close.
pub const TARGET_OFFSETS_PERCENT: [u8; 3] = [5, 10, 15];

const GAIN_MULTIPLIERS: [f64; 3] = [1.05, 1.10, 1.15];
const LOSS_MULTIPLIERS: [f64; 3] = [0.95, 0.90, 0.85];

/// Direction of a target relative to the previous close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Above the previous close.
    Gain,
    /// Below the previous close.
    Loss,
}

/// One rounded target price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTarget {
    /// Side of the previous close.
    pub direction: Direction,
    /// Offset from the previous close, in whole percent.
    pub percent: u8,
    /// Rounded target price.
    pub price: f64,
}

impl PriceTarget {
    /// Signed label such as `+5%` or `-15%`.
    pub fn label(&self) -> String {
        let sign = match self.direction {
            Direction::Gain => '+',
            Direction::Loss => '-',
        };
        format!("{sign}{}%", self.percent)
    }
}

impl fmt::Display for PriceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${:.2}", self.label(), self.price)
    }
}

/// Three targets on one side of the previous close, nearest first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetLadder {
    /// 5% offset.
    pub five: PriceTarget,
    /// 10% offset.
    pub ten: PriceTarget,
    /// 15% offset.
    pub fifteen: PriceTarget,
}

impl TargetLadder {
    fn build(direction: Direction, base: f64, [near, mid, far]: [f64; 3]) -> Self {
        let [five, ten, fifteen] = TARGET_OFFSETS_PERCENT;
        let target = |percent, multiplier: f64| PriceTarget {
            direction,
            percent,
            price: round_to_cents(base * multiplier),
        };
        Self {
            five: target(five, near),
            ten: target(ten, mid),
            fifteen: target(fifteen, far),
        }
    }

    /// Targets ordered from the nearest to the furthest offset.
    pub fn iter(&self) -> impl Iterator<Item = &PriceTarget> {
        [&self.five, &self.ten, &self.fifteen].into_iter()
    }

    /// Target prices ordered from the nearest to the furthest offset.
    pub fn prices(&self) -> [f64; 3] {
        [self.five.price, self.ten.price, self.fifteen.price]
    }
}

/// Gain and loss targets at 5%, 10% and 15% of the previous close.
///
/// # Examples
/// ```
/// use stock_calculator::domain::PriceTargets;
///
/// let targets = PriceTargets::from_previous_close(100.0);
/// assert_eq!(targets.gains.prices(), [105.0, 110.0, 115.0]);
/// assert_eq!(targets.losses.prices(), [95.0, 90.0, 85.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceTargets {
    /// Targets above the previous close.
    pub gains: TargetLadder,
    /// Targets below the previous close.
    pub losses: TargetLadder,
}

impl PriceTargets {
    /// Compute all six targets, each rounded to cents.
    pub fn from_previous_close(previous_close: f64) -> Self {
        Self {
            gains: TargetLadder::build(Direction::Gain, previous_close, GAIN_MULTIPLIERS),
            losses: TargetLadder::build(Direction::Loss, previous_close, LOSS_MULTIPLIERS),
        }
    }
}
