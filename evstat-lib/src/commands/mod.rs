//! Command-line interface and orchestration for evstat
//!
//! # Commands
//!
//! - **recency**: read an events file and count events per recency window
//! - **leaders**: read a lead-generation daily summary and report the month's top client(s)
//! - **init**: generate a default configuration file
//! - **validate**: check a configuration file
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate handler. The data commands load the configuration, compute their
//! result with the `recency` or `leads` module, and hand it to the `common` module,
//! which sets up logging and renders the requested report formats.

mod common;
mod config;
mod host;
mod init;
mod leaders;
mod recency;
mod run;
mod validate;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use leaders::{LeadersArgs, process_leaders};
pub use recency::{RecencyArgs, process_recency};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
