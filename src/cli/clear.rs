use super::ui::{self, StyleType};
use crate::core::DayCache;
use anyhow::Result;
use std::io::Write;

pub fn run(cache: &DayCache, key: &str, out: &mut dyn Write) -> Result<()> {
    if cache.delete(key) {
        writeln!(out, "{}", ui::style_text("Cache file cleared", StyleType::Success))?;
    } else {
        writeln!(out, "{}", ui::style_text("No cache file found", StyleType::Warning))?;
    }
    Ok(())
}
