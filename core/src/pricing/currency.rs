// bookstore_orders/src/pricing/currency.rs

/// Formats an amount as dollars with exactly two decimals, e.g. `$12.30`.
///
/// Rounds half away from zero on the cent. Amounts like `1.005` are stored
/// as `1.00499999...`, so the scaled value is nudged by a tolerance far below
/// a cent before rounding to honor the decimal the user actually sees.
/// Non-finite input formats as `$0.00`.
pub fn format_currency(amount: f64) -> String {
  if !amount.is_finite() {
    return "$0.00".to_string();
  }
  let scaled = amount * 100.0;
  let cents = (scaled + scaled.signum() * 1e-7).round();
  if cents == 0.0 {
    return "$0.00".to_string();
  }
  let negative = cents < 0.0;
  let cents = cents.abs();
  let whole = (cents / 100.0).trunc();
  let fraction = cents - whole * 100.0;
  format!("{}${:.0}.{:02.0}", if negative { "-" } else { "" }, whole, fraction)
}
