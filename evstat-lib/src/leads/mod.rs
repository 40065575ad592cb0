//! Monthly lead leaders from a lead-generation daily summary
//!
//! A daily summary lists, per client and day, how many leads the client generated.
//! [`LeadTable`] holds one entry per client and day (later rows replace earlier ones),
//! and [`LeadTable::monthly_leaders`] reports the client(s) with the highest total
//! for a [`Month`], keeping every client in a tie.

mod lead_record;
mod lead_table;
mod month;

pub use lead_record::{LeadRecord, LeadRow};
pub use lead_table::{LeadFormat, LeadLeader, LeadTable};
pub use month::Month;
