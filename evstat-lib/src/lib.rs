#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for evstat
//!
//! This library consolidates the functionality of the evstat tool, which computes
//! statistics over event data stored in CSV files.
//!
//! # Module Organization
//!
//! - [`recency`]: cumulative recency-window counts over event timestamps
//! - [`leads`]: monthly lead leaders from a lead-generation daily summary
//! - `commands`: command-line interface and orchestration
//! - `reports`: console, CSV, and JSON rendering of results

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod leads;
mod line_index;
pub mod recency;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
