//! Cross-rate conversion through the rate table's base currency

use crate::core::error::{CurrencyRole, CurryError, Result};
use crate::core::rates::Rates;

/// Parses a user-supplied amount. Zero and non-finite values are rejected.
pub fn parse_amount(value: &str) -> Result<f64> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| CurryError::Input(format!("Supply a valid non-zero number, got \"{value}\"")))?;
    if !amount.is_finite() {
        return Err(CurryError::Input(format!(
            "Supply a valid non-zero number, got \"{value}\""
        )));
    }
    ensure_non_zero(amount)?;
    Ok(amount)
}

fn ensure_non_zero(amount: f64) -> Result<()> {
    if amount == 0.0 {
        return Err(CurryError::Input(
            "Supply a valid non-zero number".to_string(),
        ));
    }
    Ok(())
}

fn lookup(rates: &Rates, code: &str, role: CurrencyRole) -> Result<f64> {
    // A zero rate is treated the same as an absent currency.
    let rate = rates.rate(code);
    if rate == 0.0 {
        return Err(CurryError::UnknownCurrency {
            role,
            code: code.to_string(),
        });
    }
    Ok(rate)
}

/// Converts `amount` of `from` into `to`.
pub fn convert(rates: &Rates, amount: f64, from: &str, to: &str) -> Result<f64> {
    ensure_non_zero(amount)?;
    let rate_from = lookup(rates, from, CurrencyRole::Source)?;
    let rate_to = lookup(rates, to, CurrencyRole::Target)?;
    Ok(amount / (rate_from / rate_to))
}
