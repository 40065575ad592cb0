use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::leads::{LeadTable, Month};
use crate::reports::LeadersReport;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{EnrichableExt, IntoAppError};
use std::fs::File;
use std::io::BufReader;

const LOG_TARGET: &str = "   leaders";

#[derive(Parser, Debug)]
pub struct LeadersArgs {
    /// Month to report on (January is 1)
    #[arg(long)]
    pub month: u32,

    /// Four-digit year of the month
    #[arg(long)]
    pub year: i32,

    /// Lead-generation daily summary file (default is `leads.data_path` from the configuration)
    #[arg(long, value_name = "PATH")]
    pub data: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Report the client(s) that generated the most leads in a month.
///
/// # Errors
///
/// Returns an error if the month is invalid or the lead summary cannot be loaded
pub fn process_leaders<H: Host>(host: &mut H, args: &LeadersArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let config = &common.config.leads;

    let month = Month::new(args.year, args.month)?;
    let format = config.lead_format()?;

    let path = args.data.as_ref().unwrap_or(&config.data_path);
    log::info!(target: LOG_TARGET, "Reading source data from {path}");

    let file = File::open(path).into_app_err_with(|| format!("opening lead summary '{path}'"))?;
    let table = LeadTable::load(BufReader::new(file), &format).map_err(|e| e.enrich_with(|| format!("loading lead summary '{path}'")))?;

    let leaders = table.monthly_leaders(&month);
    log::debug!(target: LOG_TARGET, "Found {} leader(s) for {month}", leaders.len());

    common.report(&LeadersReport::new(&month, leaders))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::commands::run;
    use std::fs;

    const SUMMARY: &str = "\
client_id,sum_date,number_of_leads
1,'01-May-2018',10
2,'02-May-2018',12
3,'03-May-2018',12
1,'01-Jun-2018',99
";

    fn write_summary(dir: &tempfile::TempDir, text: &str) -> String {
        let path = dir.path().join("leads.csv");
        fs::write(&path, text).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_reports_tied_leaders() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_summary(&dir, SUMMARY);

        let mut host = TestHost::new();
        run(&mut host, ["evstat", "leaders", "--month", "5", "--year", "2018", "--data", data.as_str(), "--color", "never"]).unwrap();

        assert_eq!(
            host.output_str(),
            "Customers who generated the most leads in 5/2018.\nClient ID: 2 (12 leads)\nClient ID: 3 (12 leads)\n"
        );
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_invalid_month() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_summary(&dir, SUMMARY);

        let mut host = TestHost::new();
        let err = run(&mut host, ["evstat", "leaders", "--month", "13", "--year", "2018", "--data", data.as_str()]).unwrap_err();
        assert!(err.to_string().contains("between 1 and 12"), "{err}");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_csv_report() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_summary(&dir, SUMMARY);
        let csv_path = dir.path().join("leaders.csv").to_string_lossy().into_owned();

        let mut host = TestHost::new();
        run(&mut host, ["evstat", "leaders", "--month", "6", "--year", "2018", "--data", data.as_str(), "--csv", csv_path.as_str()]).unwrap();

        assert!(host.output_buf.is_empty());
        assert_eq!(fs::read_to_string(&csv_path).unwrap(), "year,month,client_id,total_leads\n2018,6,1,99\n");
    }
}
