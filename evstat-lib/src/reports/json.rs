use super::{LeadersReport, RecencyReport};
use crate::Result;
use core::fmt::Write;
use serde::Serialize;

pub fn generate_recency<T: Serialize, W: Write>(report: &RecencyReport<T>, writer: &mut W) -> Result<()> {
    write_pretty(report, writer)
}

pub fn generate_leaders<W: Write>(report: &LeadersReport, writer: &mut W) -> Result<()> {
    write_pretty(report, writer)
}

fn write_pretty<W: Write>(value: &impl Serialize, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
