use crate::Result;
use chrono::NaiveDate;
use ohno::{IntoAppError, app_err};
use serde::Deserialize;

const LOG_TARGET: &str = "     leads";

/// One row of a lead-generation daily summary, before validation.
#[derive(Debug, Deserialize)]
pub struct LeadRow<'a> {
    pub client_id: &'a str,
    pub sum_date: &'a str,
    #[serde(default)]
    pub number_of_leads: &'a str,
}

/// The number of leads one client generated on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadRecord {
    pub client_id: u64,
    pub sum_date: NaiveDate,

    /// `None` when the summary left the count blank.
    pub number_of_leads: Option<u64>,
}

impl LeadRecord {
    /// Validate a raw row, parsing `sum_date` with the given `chrono` format string.
    ///
    /// # Errors
    ///
    /// Returns an error if the client id, date, or lead count cannot be parsed.
    pub fn parse(row: &LeadRow<'_>, date_format: &str) -> Result<Self> {
        let client_id = row
            .client_id
            .parse::<u64>()
            .into_app_err_with(|| format!("invalid client_id '{}'", row.client_id))?;

        let sum_date = NaiveDate::parse_from_str(row.sum_date, date_format).map_err(|e| {
            log::error!(target: LOG_TARGET, "Date format unrecognized: {}", row.sum_date);
            app_err!("date format unrecognized: '{}' does not match '{date_format}': {e}", row.sum_date)
        })?;

        let number_of_leads = if row.number_of_leads.is_empty() {
            None
        } else {
            Some(
                row.number_of_leads
                    .parse::<u64>()
                    .into_app_err_with(|| format!("invalid number_of_leads '{}'", row.number_of_leads))?,
            )
        };

        Ok(Self {
            client_id,
            sum_date,
            number_of_leads,
        })
    }
}
