use super::EventRecord;
use crate::Result;
use crate::line_index::LineIndex;
use csv::{ReaderBuilder, StringRecord};
use ohno::IntoAppError;
use std::io::Read;

const LOG_TARGET: &str = "    events";

/// Names of the header columns events are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventColumns<'a> {
    pub timestamp: &'a str,
    pub category: &'a str,
}

impl Default for EventColumns<'_> {
    fn default() -> Self {
        Self {
            timestamp: "Timestamp",
            category: "Category",
        }
    }
}

/// Read event rows from delimited text with a header row.
///
/// Rows may be shorter than the header; missing fields become `None`. A header
/// without the timestamp column is accepted, in which case every event will lack a
/// timestamp.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid CSV.
pub fn read_events(mut reader: impl Read, columns: &EventColumns<'_>) -> Result<Vec<EventRecord>> {
    let mut text = Vec::new();
    let _ = reader.read_to_end(&mut text).into_app_err("unable to read events")?;
    let lines = LineIndex::new(&text);

    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(text.as_slice());
    let headers = csv_reader.headers().into_app_err("unable to read the events header row")?.clone();

    let timestamp_index = column_index(&headers, columns.timestamp);
    let category_index = column_index(&headers, columns.category);

    if timestamp_index.is_none() {
        log::warn!(
            target: LOG_TARGET,
            "Events header has no '{}' column, so no event will be counted",
            columns.timestamp
        );
    }

    let mut events = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let line = lines.record_line(csv_reader.position().byte());
        if !csv_reader
            .read_record(&mut record)
            .into_app_err_with(|| format!("unable to read event row on line {line}"))?
        {
            break;
        }

        let field = |index: Option<usize>| index.and_then(|i| record.get(i)).map(str::to_string);
        events.push(EventRecord {
            category: field(category_index),
            timestamp: field(timestamp_index),
        });
    }

    log::debug!(target: LOG_TARGET, "Read {} event row(s)", events.len());
    Ok(events)
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == name)
}
