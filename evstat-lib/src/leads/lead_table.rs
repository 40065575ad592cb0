use super::{LeadRecord, LeadRow, Month};
use crate::Result;
use crate::line_index::LineIndex;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use ohno::{EnrichableExt, IntoAppError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Read;

const LOG_TARGET: &str = "     leads";

/// How a lead summary file is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFormat<'a> {
    /// `chrono` format string for the `sum_date` column.
    pub date_format: &'a str,
    pub quote: u8,
}

impl Default for LeadFormat<'_> {
    fn default() -> Self {
        Self {
            date_format: "%d-%b-%Y",
            quote: b'\'',
        }
    }
}

/// A client whose monthly lead total is the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeadLeader {
    pub client_id: u64,
    pub total_leads: u64,
}

/// Daily lead counts, keyed by client and day.
///
/// There is at most one entry per `(client_id, sum_date)`; inserting a second one
/// replaces the first.
#[derive(Debug, Clone, Default)]
pub struct LeadTable {
    rows: BTreeMap<(u64, NaiveDate), Option<u64>>,
}

impl LeadTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lead summary with a `client_id,sum_date,number_of_leads` header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid CSV or any row fails validation.
    pub fn load(mut reader: impl Read, format: &LeadFormat<'_>) -> Result<Self> {
        let mut text = Vec::new();
        let _ = reader.read_to_end(&mut text).into_app_err("unable to read lead summary")?;
        let lines = LineIndex::new(&text);

        let mut csv_reader = ReaderBuilder::new()
            .quote(format.quote)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(text.as_slice());

        let headers = csv_reader.headers().into_app_err("unable to read the lead summary header row")?.clone();

        let mut table = Self::new();
        let mut record = StringRecord::new();
        loop {
            let line = lines.record_line(csv_reader.position().byte());
            if !csv_reader
                .read_record(&mut record)
                .into_app_err_with(|| format!("unable to read lead summary row on line {line}"))?
            {
                break;
            }

            let row: LeadRow<'_> = record
                .deserialize(Some(&headers))
                .into_app_err_with(|| format!("malformed lead summary row on line {line}"))?;
            let lead = LeadRecord::parse(&row, format.date_format)
                .map_err(|e| e.enrich_with(|| format!("invalid lead summary row on line {line}")))?;

            if table.insert(lead) {
                log::debug!(
                    target: LOG_TARGET,
                    "Line {line} replaces the earlier entry for client {} on {}",
                    lead.client_id,
                    lead.sum_date
                );
            }
        }

        log::info!(target: LOG_TARGET, "Loaded {} daily lead entries", table.len());
        Ok(table)
    }

    /// Insert a daily count, returning whether it replaced an existing entry for the same client and day.
    pub fn insert(&mut self, lead: LeadRecord) -> bool {
        self.rows.insert((lead.client_id, lead.sum_date), lead.number_of_leads).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = LeadRecord> + '_ {
        self.rows.iter().map(|(&(client_id, sum_date), &number_of_leads)| LeadRecord {
            client_id,
            sum_date,
            number_of_leads,
        })
    }

    /// Find the client(s) with the most total leads within `month`.
    ///
    /// A blank daily count adds nothing to a client's total, but the client still takes
    /// part, so a month of only blank counts is led by every client in it with zero
    /// leads. Ties produce several leaders, ordered by client id. A month without any
    /// rows has no leaders.
    #[must_use]
    pub fn monthly_leaders(&self, month: &Month) -> Vec<LeadLeader> {
        let mut totals: BTreeMap<u64, u64> = BTreeMap::new();
        for lead in self.iter().filter(|lead| month.contains(lead.sum_date)) {
            let total = totals.entry(lead.client_id).or_default();
            *total = total.saturating_add(lead.number_of_leads.unwrap_or(0));
        }

        let Some(&max) = totals.values().max() else {
            return Vec::new();
        };

        totals
            .into_iter()
            .filter(|&(_, total)| total == max)
            .map(|(client_id, total_leads)| LeadLeader { client_id, total_leads })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
client_id,sum_date,number_of_leads
1,'30-Apr-2018',100
1,'01-May-2018',10
2,'01-May-2018',7
2,'15-May-2018',9
3,'31-May-2018',
4,'01-Jun-2018',500
";

    fn load(text: &str) -> LeadTable {
        LeadTable::load(text.as_bytes(), &LeadFormat::default()).unwrap()
    }

    fn leader(client_id: u64, total_leads: u64) -> LeadLeader {
        LeadLeader { client_id, total_leads }
    }

    fn may_2018() -> Month {
        Month::new(2018, 5).unwrap()
    }

    #[test]
    fn test_load_sample() {
        let table = load(SAMPLE);
        assert_eq!(table.len(), 6);
        assert!(table.iter().any(|lead| lead.client_id == 3 && lead.number_of_leads.is_none()));
    }

    #[test]
    fn test_single_leader() {
        assert_eq!(load(SAMPLE).monthly_leaders(&may_2018()), [leader(2, 16)]);
    }

    #[test]
    fn test_tied_leaders() {
        let text = "client_id,sum_date,number_of_leads\n5,'02-May-2018',4\n3,'03-May-2018',4\n4,'04-May-2018',1\n";
        assert_eq!(load(text).monthly_leaders(&may_2018()), [leader(3, 4), leader(5, 4)]);
    }

    #[test]
    fn test_duplicate_day_last_row_wins() {
        let text = "\
client_id,sum_date,number_of_leads
1,'01-May-2018',50
2,'01-May-2018',20
1,'01-May-2018',5
";
        let table = load(text);
        assert_eq!(table.len(), 2);
        assert_eq!(table.monthly_leaders(&may_2018()), [leader(2, 20)]);
    }

    #[test]
    fn test_month_without_leads() {
        assert!(load(SAMPLE).monthly_leaders(&Month::new(2018, 7).unwrap()).is_empty());
    }

    #[test]
    fn test_only_blank_counts_tie_at_zero() {
        let text = "client_id,sum_date,number_of_leads\n1,'01-May-2018',\n2,'02-May-2018',\n";
        assert_eq!(load(text).monthly_leaders(&may_2018()), [leader(1, 0), leader(2, 0)]);
    }

    #[test]
    fn test_blank_count_does_not_reduce_total() {
        let text = "client_id,sum_date,number_of_leads\n1,'01-May-2018',\n1,'02-May-2018',4\n2,'03-May-2018',3\n";
        assert_eq!(load(text).monthly_leaders(&may_2018()), [leader(1, 4)]);
    }

    #[test]
    fn test_error_names_physical_line_after_blank_lines() {
        let text = "client_id,sum_date,number_of_leads\n1,'01-May-2018',3\n\n\n2,'2018-05-04',1\n";
        let err = LeadTable::load(text.as_bytes(), &LeadFormat::default()).unwrap_err();
        assert!(err.to_string().contains("invalid lead summary row on line 5"), "{err}");
    }

    #[test]
    fn test_error_line_accounts_for_multi_line_quoted_field() {
        let text = "client_id,sum_date,number_of_leads\n'1\n','01-May-2018',3\n2,'2018-05-04',1\n";
        let err = LeadTable::load(text.as_bytes(), &LeadFormat::default()).unwrap_err();
        assert!(err.to_string().contains("on line 4"), "{err}");
    }

    #[test]
    fn test_leap_day_is_included() {
        let text = "client_id,sum_date,number_of_leads\n1,'28-Feb-2020',3\n2,'29-Feb-2020',4\n";
        let feb = Month::new(2020, 2).unwrap();
        assert_eq!(load(text).monthly_leaders(&feb), [leader(2, 4)]);
    }

    #[test]
    fn test_unrecognized_date_fails_load() {
        let text = "client_id,sum_date,number_of_leads\n1,'2018-05-01',3\n";
        let err = LeadTable::load(text.as_bytes(), &LeadFormat::default()).unwrap_err();
        assert!(format!("{err:?}").contains("date format unrecognized"), "{err:?}");
    }

    #[test]
    fn test_insert_reports_replacement() {
        let lead = LeadRecord {
            client_id: 1,
            sum_date: NaiveDate::from_ymd_opt(2018, 5, 1).unwrap(),
            number_of_leads: Some(1),
        };
        let mut table = LeadTable::new();
        assert!(!table.insert(lead));
        assert!(table.insert(LeadRecord {
            number_of_leads: Some(2),
            ..lead
        }));
        assert_eq!(table.iter().next().and_then(|l| l.number_of_leads), Some(2));
    }
}
