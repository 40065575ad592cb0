//! Multi-format report generation for recency counts and lead leaders
//!
//! # Implementation Model
//!
//! Three report generators are provided, each exposing a `generate_recency` and a
//! `generate_leaders` function:
//! - **Console**: aligned, optionally colored terminal output
//! - **CSV**: one row per age group or leader
//! - **JSON**: machine-readable structured data
//!
//! All generators write to a `core::fmt::Write` and operate on the same inputs,
//! [`RecencyReport`] and [`LeadersReport`], so callers can render several formats
//! from one result.

mod common;
mod console;
mod csv;
mod json;
mod reportable;

pub use console::{generate_leaders as console_leaders, generate_recency as console_recency};
pub use csv::{generate_leaders as csv_leaders, generate_recency as csv_recency};
pub use json::{generate_leaders as json_leaders, generate_recency as json_recency};
pub use reportable::{LeadersReport, RecencyBucket, RecencyReport};
