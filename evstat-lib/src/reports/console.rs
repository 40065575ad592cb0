use super::{LeadersReport, RecencyReport, common};
use crate::Result;
use crate::recency::TimeValue;
use core::fmt::Write;
use owo_colors::OwoColorize;

const AGE_GROUP_HEADER: &str = "Age group";
const SINCE_HEADER: &str = "Since";
const COUNT_HEADER: &str = "Events";

pub fn generate_recency<T: TimeValue, W: Write>(report: &RecencyReport<T>, use_colors: bool, writer: &mut W) -> Result<()> {
    let title = format!("Recency counts as of {}", report.as_of_time);
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }

    let rows: Vec<[String; 3]> = report
        .buckets
        .iter()
        .map(|bucket| [bucket.age_group.to_string(), common::format_since(bucket.since), bucket.count.to_string()])
        .collect();

    let width = |header: &str, column: usize| rows.iter().map(|row| row[column].len()).chain([header.len()]).max().unwrap_or(0);
    let widths = [width(AGE_GROUP_HEADER, 0), width(SINCE_HEADER, 1), width(COUNT_HEADER, 2)];

    let header = format!(
        "  {AGE_GROUP_HEADER:>w0$}  {SINCE_HEADER:>w1$}  {COUNT_HEADER:>w2$}",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    );
    if use_colors {
        writeln!(writer, "{}", header.dimmed())?;
    } else {
        writeln!(writer, "{header}")?;
    }

    for [age_group, since, count] in &rows {
        let count = format!("{count:>w$}", w = widths[2]);
        let count = if use_colors { count.green().to_string() } else { count };
        writeln!(writer, "  {age_group:>w0$}  {since:>w1$}  {count}", w0 = widths[0], w1 = widths[1])?;
    }

    if report.skipped > 0 {
        writeln!(writer, "Skipped {} event(s) without a usable timestamp", report.skipped)?;
    }

    if report.future > 0 {
        writeln!(writer, "Ignored {} event(s) later than the as-of time", report.future)?;
    }

    Ok(())
}

pub fn generate_leaders<W: Write>(report: &LeadersReport, use_colors: bool, writer: &mut W) -> Result<()> {
    let period = format!("{}/{}", report.month, report.year);

    if report.leaders.is_empty() {
        writeln!(writer, "No leads were recorded in {period}.")?;
        return Ok(());
    }

    writeln!(writer, "Customers who generated the most leads in {period}.")?;
    for leader in &report.leaders {
        let id = leader.client_id.to_string();
        let id = if use_colors { id.bold().to_string() } else { id };
        writeln!(writer, "Client ID: {id} ({} leads)", leader.total_leads)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::LeadLeader;
    use crate::reports::RecencyBucket;

    fn recency_report() -> RecencyReport<i64> {
        RecencyReport {
            as_of_time: 10,
            buckets: vec![
                RecencyBucket {
                    age_group: 1,
                    since: Some(9),
                    count: 2,
                },
                RecencyBucket {
                    age_group: 5,
                    since: Some(5),
                    count: 3,
                },
                RecencyBucket {
                    age_group: 13,
                    since: None,
                    count: 0,
                },
            ],
            skipped: 0,
            future: 0,
        }
    }

    #[test]
    fn test_generate_recency() {
        let mut output = String::new();
        generate_recency(&recency_report(), false, &mut output).unwrap();
        insta::assert_snapshot!(output, @r"
        Recency counts as of 10
          Age group  Since  Events
                  1      9       2
                  5      5       3
                 13      -       0
        ");
    }

    #[test]
    fn test_generate_recency_mentions_dropped_events() {
        let report = RecencyReport {
            skipped: 2,
            future: 1,
            ..recency_report()
        };
        let mut output = String::new();
        generate_recency(&report, false, &mut output).unwrap();
        assert!(output.contains("Skipped 2 event(s)"), "{output}");
        assert!(output.contains("Ignored 1 event(s)"), "{output}");
    }

    #[test]
    fn test_generate_recency_without_groups() {
        let report = RecencyReport {
            buckets: Vec::new(),
            ..recency_report()
        };
        let mut output = String::new();
        generate_recency(&report, false, &mut output).unwrap();
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_generate_recency_with_colors() {
        let mut output = String::new();
        generate_recency(&recency_report(), true, &mut output).unwrap();
        assert!(output.contains("\u{1b}["), "expected ANSI escapes in {output:?}");
    }

    #[test]
    fn test_generate_leaders() {
        let report = LeadersReport {
            year: 2018,
            month: 5,
            leaders: vec![
                LeadLeader {
                    client_id: 3,
                    total_leads: 40,
                },
                LeadLeader {
                    client_id: 8,
                    total_leads: 40,
                },
            ],
        };
        let mut output = String::new();
        generate_leaders(&report, false, &mut output).unwrap();
        insta::assert_snapshot!(output, @r"
        Customers who generated the most leads in 5/2018.
        Client ID: 3 (40 leads)
        Client ID: 8 (40 leads)
        ");
    }

    #[test]
    fn test_generate_leaders_empty() {
        let report = LeadersReport {
            year: 2018,
            month: 7,
            leaders: Vec::new(),
        };
        let mut output = String::new();
        generate_leaders(&report, false, &mut output).unwrap();
        assert_eq!(output, "No leads were recorded in 7/2018.\n");
    }
}
