//! Command dispatch logic for evstat

use super::{InitArgs, LeadersArgs, RecencyArgs, ValidateArgs, init_config, process_leaders, process_recency, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "evstat", author, version, long_about = None)]
#[command(about = "Recency buckets and lead leaders from CSV event data")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: EvstatSubcommand,
}

#[derive(Subcommand, Debug)]
enum EvstatSubcommand {
    /// Count events within each recency window
    Recency(Box<RecencyArgs>),
    /// Find the client(s) with the most leads in a month
    Leaders(Box<LeadersArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        EvstatSubcommand::Recency(recency_args) => process_recency(host, recency_args),
        EvstatSubcommand::Leaders(leaders_args) => process_leaders(host, leaders_args),
        EvstatSubcommand::Init(init_args) => init_config(host, init_args),
        EvstatSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
