use anyhow::Result;
use std::io::Write;

/// Prints the provider response exactly as stored.
pub fn run(raw: &[u8], out: &mut dyn Write) -> Result<()> {
    out.write_all(raw)?;
    writeln!(out)?;
    Ok(())
}
