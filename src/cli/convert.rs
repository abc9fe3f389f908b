use super::ui::{self, StyleType};
use crate::core::Rates;
use crate::core::convert::{convert, parse_amount};
use crate::core::error::Result as CurryResult;
use anyhow::Result;
use std::io::Write;

/// Conversion arguments as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub amount: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub quiet: bool,
}

/// A conversion with a parsed amount and resolved currency codes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub quiet: bool,
}

impl ConvertOptions {
    /// Parses the amount and fills missing codes with `default_currency`.
    pub fn resolve(&self, default_currency: &str) -> CurryResult<ConversionRequest> {
        let amount = parse_amount(&self.amount)?;
        let code = |c: &Option<String>| c.as_deref().unwrap_or(default_currency).to_uppercase();
        Ok(ConversionRequest {
            amount,
            from: code(&self.from),
            to: code(&self.to),
            quiet: self.quiet,
        })
    }
}

pub fn run(request: &ConversionRequest, rates: &Rates, day: &str, out: &mut dyn Write) -> Result<()> {
    let value = convert(rates, request.amount, &request.from, &request.to)?;

    if request.quiet {
        writeln!(out, "{value:.2}")?;
    } else {
        writeln!(
            out,
            "{:.2} {} is {} {} {}",
            request.amount,
            request.from,
            ui::style_text(&format!("{value:.2}"), StyleType::Value),
            request.to,
            ui::style_text(&format!("(as of {day})"), StyleType::Subtle),
        )?;
    }
    Ok(())
}
