use crate::leads::{LeadLeader, Month};
use crate::recency::{AgeGroup, RecencyBucketer, RecencyTally, TimeValue};
use serde::Serialize;

/// One age group's row in a recency report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecencyBucket<T> {
    pub age_group: T,

    /// Earliest timestamp counted, or `None` when the window reaches past the as-of time.
    pub since: Option<T>,
    pub count: u64,
}

/// Recency counts ready for reporting, in the order the age groups were given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecencyReport<T> {
    pub as_of_time: T,
    pub buckets: Vec<RecencyBucket<T>>,
    pub skipped: u64,
    pub future: u64,
}

impl<T: TimeValue> RecencyReport<T> {
    #[must_use]
    pub fn new(age_groups: &[AgeGroup<T>], bucketer: &RecencyBucketer<T>, tally: RecencyTally) -> Self {
        let buckets = age_groups
            .iter()
            .zip(bucketer.thresholds())
            .zip(tally.counts)
            .map(|((group, threshold), count)| RecencyBucket {
                age_group: group.width(),
                since: threshold.min_timestamp(),
                count,
            })
            .collect();

        Self {
            as_of_time: bucketer.as_of_time(),
            buckets,
            skipped: tally.skipped,
            future: tally.future,
        }
    }
}

/// The lead leaders of one month, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadersReport {
    pub year: i32,
    pub month: u32,
    pub leaders: Vec<LeadLeader>,
}

impl LeadersReport {
    #[must_use]
    pub fn new(month: &Month, leaders: Vec<LeadLeader>) -> Self {
        Self {
            year: month.year(),
            month: month.month(),
            leaders,
        }
    }
}
