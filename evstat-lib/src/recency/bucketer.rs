use super::{AgeGroup, Threshold, TimeValue, Timestamped};
use serde::Serialize;

/// Count how many events fall within each age group's window.
///
/// Buckets are cumulative: an event counts toward every group whose window is wide
/// enough to contain it. The result is positionally aligned with `age_groups`.
/// Events with a missing or unparsable timestamp, and events later than `as_of_time`,
/// are skipped.
///
/// ```
/// use evstat_lib::recency::{AgeGroup, compute_recency_counts};
///
/// let age_groups = AgeGroup::from_widths([1_i64, 5, 8]).unwrap();
/// let counts = compute_recency_counts(&[10_i64, 9, 5, 2, 0], &age_groups, 10);
/// assert_eq!(counts, [2, 3, 4]);
/// ```
#[must_use]
pub fn compute_recency_counts<'a, T, E>(events: impl IntoIterator<Item = &'a E>, age_groups: &[AgeGroup<T>], as_of_time: T) -> Vec<u64>
where
    T: TimeValue,
    E: Timestamped<T> + 'a,
{
    RecencyBucketer::new(age_groups, as_of_time).count(events)
}

/// Per-group counts together with what was left out of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecencyTally {
    pub counts: Vec<u64>,

    /// Events whose timestamp was missing or could not be parsed.
    pub skipped: u64,

    /// Events later than the as-of time.
    pub future: u64,
}

/// Recency buckets for a fixed set of age groups and as-of time.
///
/// The thresholds are derived once up front so that the per-event work is limited
/// to comparisons.
#[derive(Debug, Clone)]
pub struct RecencyBucketer<T> {
    as_of_time: T,
    thresholds: Vec<Threshold<T>>,
}

impl<T: TimeValue> RecencyBucketer<T> {
    #[must_use]
    pub fn new(age_groups: &[AgeGroup<T>], as_of_time: T) -> Self {
        Self {
            as_of_time,
            thresholds: age_groups.iter().map(|&group| Threshold::for_age_group(group, as_of_time)).collect(),
        }
    }

    #[must_use]
    pub const fn as_of_time(&self) -> T {
        self.as_of_time
    }

    #[must_use]
    pub fn thresholds(&self) -> &[Threshold<T>] {
        &self.thresholds
    }

    #[must_use]
    pub fn count<'a, E>(&self, events: impl IntoIterator<Item = &'a E>) -> Vec<u64>
    where
        E: Timestamped<T> + 'a,
    {
        self.tally(events).counts
    }

    #[must_use]
    pub fn tally<'a, E>(&self, events: impl IntoIterator<Item = &'a E>) -> RecencyTally
    where
        E: Timestamped<T> + 'a,
    {
        let mut tally = RecencyTally {
            counts: vec![0; self.thresholds.len()],
            skipped: 0,
            future: 0,
        };

        for event in events {
            let Some(timestamp) = event.timestamp() else {
                tally.skipped += 1;
                continue;
            };

            if timestamp > self.as_of_time {
                tally.future += 1;
                continue;
            }

            for (count, threshold) in tally.counts.iter_mut().zip(&self.thresholds) {
                if threshold.admits(timestamp) {
                    *count += 1;
                }
            }
        }

        tally
    }
}
