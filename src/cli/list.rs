use crate::core::Rates;
use anyhow::Result;
use std::io::Write;

pub fn run(rates: &Rates, out: &mut dyn Write) -> Result<()> {
    for code in rates.currencies() {
        writeln!(out, "{code}")?;
    }
    Ok(())
}
