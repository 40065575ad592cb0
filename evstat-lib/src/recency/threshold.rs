use super::{AgeGroup, TimeValue};

/// The minimum timestamp an event needs to fall within an age group's window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold<T> {
    /// Events at or after this time (and not after the as-of time) qualify.
    AtLeast(T),

    /// The window reaches further back than the as-of time itself; nothing qualifies.
    Unreachable,
}

impl<T: TimeValue> Threshold<T> {
    /// Derive the threshold for `age_group` relative to `as_of_time`.
    #[must_use]
    pub fn for_age_group(age_group: AgeGroup<T>, as_of_time: T) -> Self {
        let width = age_group.width();
        if width <= as_of_time {
            Self::AtLeast(as_of_time - width)
        } else {
            Self::Unreachable
        }
    }

    /// Whether an event at `timestamp` meets this threshold.
    ///
    /// Callers are expected to have excluded events later than the as-of time already.
    #[inline]
    #[must_use]
    pub fn admits(self, timestamp: T) -> bool {
        match self {
            Self::AtLeast(min) => timestamp >= min,
            Self::Unreachable => false,
        }
    }

    /// The minimum timestamp, if any event can meet this threshold.
    #[must_use]
    pub const fn min_timestamp(self) -> Option<T> {
        match self {
            Self::AtLeast(min) => Some(min),
            Self::Unreachable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(width: i64, as_of_time: i64) -> Threshold<i64> {
        Threshold::for_age_group(AgeGroup::new(width).unwrap(), as_of_time)
    }

    #[test]
    fn test_thresholds_for_default_groups() {
        let thresholds: Vec<_> = [1, 5, 8, 13].into_iter().map(|w| threshold(w, 10)).collect();
        assert_eq!(
            thresholds,
            [
                Threshold::AtLeast(9),
                Threshold::AtLeast(5),
                Threshold::AtLeast(2),
                Threshold::Unreachable
            ]
        );
    }

    #[test]
    fn test_width_equal_to_as_of_time_reaches_zero() {
        assert_eq!(threshold(10, 10), Threshold::AtLeast(0));
    }

    #[test]
    fn test_zero_width_admits_only_as_of_time() {
        let t = threshold(0, 10);
        assert!(t.admits(10));
        assert!(!t.admits(9));
    }

    #[test]
    fn test_unreachable_admits_nothing() {
        let t = threshold(13, 10);
        assert!(!t.admits(10));
        assert!(!t.admits(i64::MIN));
        assert_eq!(t.min_timestamp(), None);
    }

    #[test]
    fn test_unsigned_wider_than_as_of_does_not_underflow() {
        let t = Threshold::for_age_group(AgeGroup::new(20_u64).unwrap(), 10);
        assert_eq!(t, Threshold::Unreachable);
    }
}
