//! Rounding rules for reported monetary amounts.

/// Distance from a half-cent boundary that still counts as on the boundary.
///
/// Amounts are accumulated as binary floats, so a decimal value such as
/// `100.005` is stored as `100.00499999...`.
const HALF_CENT_TOLERANCE: f64 = 1e-6;

/// Rounds an amount to two decimal places, half away from zero.
///
/// `100.005` becomes `100.01` and `-100.005` becomes `-100.01`.
pub fn round_to_cents(amount: f64) -> f64 {
    if !amount.is_finite() {
        return amount;
    }
    let scaled = amount * 100.0;
    let whole = scaled.trunc();
    let fraction = (scaled - whole).abs();
    let cents = if fraction + HALF_CENT_TOLERANCE >= 0.5 {
        whole + scaled.signum()
    } else {
        whole
    };
    // avoid reporting -0.0
    if cents == 0.0 { 0.0 } else { cents / 100.0 }
}
