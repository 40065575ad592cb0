use super::{LeadersReport, RecencyReport};
use crate::Result;
use crate::recency::TimeValue;
use core::fmt::Write;

pub fn generate_recency<T: TimeValue, W: Write>(report: &RecencyReport<T>, writer: &mut W) -> Result<()> {
    writeln!(writer, "age_group,since,count")?;
    for bucket in &report.buckets {
        write!(writer, "{},", bucket.age_group)?;
        if let Some(since) = bucket.since {
            write!(writer, "{since}")?;
        }
        writeln!(writer, ",{}", bucket.count)?;
    }

    Ok(())
}

pub fn generate_leaders<W: Write>(report: &LeadersReport, writer: &mut W) -> Result<()> {
    writeln!(writer, "year,month,client_id,total_leads")?;
    for leader in &report.leaders {
        writeln!(writer, "{},{},{},{}", report.year, report.month, leader.client_id, leader.total_leads)?;
    }

    Ok(())
}
