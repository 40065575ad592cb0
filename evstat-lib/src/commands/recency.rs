use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::recency::{AgeGroup, RecencyBucketer, read_events};
use crate::reports::RecencyReport;
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::Parser;
use ohno::{IntoAppError, app_err, bail};
use std::fs::File;
use std::io::{self, BufReader};

const LOG_TARGET: &str = "   recency";

#[derive(Parser, Debug)]
#[command(after_long_help = "Timestamps, age groups, and the as-of time are read as 64-bit floats; \
                             integers beyond 2^53 (about 9.007e15) are rounded.")]
pub struct RecencyArgs {
    /// Events file, a CSV with a header row (default is `recency.events_path` from the configuration)
    #[arg(long, value_name = "PATH")]
    pub events: Option<Utf8PathBuf>,

    /// Comma-separated window widths, in the same unit as the event timestamps
    #[arg(long, value_name = "WIDTHS", value_delimiter = ',', allow_negative_numbers = true)]
    pub age_groups: Option<Vec<f64>>,

    /// Reference time the windows are measured back from (default is `recency.as_of_time`, then the current Unix time).
    /// Times are read as 64-bit floats, so integers beyond 2^53 are rounded to the nearest representable value.
    #[arg(long, value_name = "TIME", allow_negative_numbers = true)]
    pub as_of: Option<f64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Count events per recency window and report the result.
///
/// # Errors
///
/// Returns an error if the configuration or events file cannot be loaded, or an age
/// group or the as-of time is invalid
pub fn process_recency<H: Host>(host: &mut H, args: &RecencyArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let config = &common.config.recency;

    let widths = args.age_groups.clone().unwrap_or_else(|| config.age_groups.clone());
    let age_groups = AgeGroup::from_widths(widths)?;

    let as_of_time = args.as_of.or(config.as_of_time).unwrap_or_else(current_unix_time);
    if !as_of_time.is_finite() {
        bail!("the as-of time must be a finite number, got {as_of_time}");
    }

    let path = args.events.as_ref().unwrap_or(&config.events_path);
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(app_err!(
                "events file '{path}' not found: point `recency.events_path` in the configuration (or --events) to a CSV file \
                 of event data starting with a header row naming two columns: {}, {}",
                config.category_column,
                config.timestamp_column
            ));
        }
        Err(e) => return Err(e).into_app_err_with(|| format!("opening events file '{path}'")),
    };

    log::info!(target: LOG_TARGET, "Reading inputs from {path}");
    let events = read_events(BufReader::new(file), &config.event_columns())?;

    let bucketer = RecencyBucketer::new(&age_groups, as_of_time);
    let tally = bucketer.tally(&events);

    if tally.skipped > 0 {
        log::debug!(target: LOG_TARGET, "Skipped {} event(s) without a usable timestamp", tally.skipped);
    }

    if tally.future > 0 {
        log::debug!(target: LOG_TARGET, "Ignored {} event(s) later than {as_of_time}", tally.future);
    }

    let report = RecencyReport::new(&age_groups, &bucketer, tally);
    common.report(&report)
}

#[expect(clippy::cast_precision_loss, reason = "Unix seconds fit well within f64's exact integer range")]
fn current_unix_time() -> f64 {
    Utc::now().timestamp() as f64
}
