//! Currency rounding shared by quotes and price targets.

/// Round a currency amount to whole cents, halves away from zero.
///
/// Already-rounded amounts are returned unchanged.
///
/// # Examples
/// ```
/// use stock_calculator::domain::round_to_cents;
///
/// assert_eq!(round_to_cents(150.005), 150.01);
/// assert_eq!(round_to_cents(148.0), 148.0);
/// ```
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
