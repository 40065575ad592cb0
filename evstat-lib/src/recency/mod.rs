//! Cumulative recency buckets over event timestamps
//!
//! Given a set of events, a reference "as-of" time, and a list of age-group widths,
//! this module counts, for each width, how many events happened within that many
//! time units before the as-of time.
//!
//! # Implementation Model
//!
//! - [`AgeGroup`] is a validated, non-negative window width.
//! - [`Threshold`] is the minimum timestamp an event needs for one age group. The
//!   thresholds are derived once per [`RecencyBucketer`], so the per-event work is
//!   only comparisons.
//! - [`Timestamped`] is the single accessor the bucketer needs from an event. A
//!   `None` timestamp marks the event as malformed and it is skipped.
//! - [`read_events`] turns delimited text into [`EventRecord`]s.
//!
//! Buckets are cumulative rather than disjoint: wider windows contain narrower ones.
//! The as-of time is an inclusive upper bound; later events are ignored entirely.

mod age_group;
mod bucketer;
mod event;
mod event_source;
mod threshold;
mod time_value;

pub use age_group::AgeGroup;
pub use bucketer::{RecencyBucketer, RecencyTally, compute_recency_counts};
pub use event::{EventRecord, Timestamped};
pub use event_source::{EventColumns, read_events};
pub use threshold::Threshold;
pub use time_value::TimeValue;
