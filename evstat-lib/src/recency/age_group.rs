use super::TimeValue;
use crate::Result;
use core::fmt::{Display, Formatter, Result as FmtResult};
use ohno::bail;

/// The width of a recency window, measured backward from the as-of time.
///
/// Widths are always non-negative; negative or NaN widths are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AgeGroup<T>(T);

impl<T: TimeValue> AgeGroup<T> {
    /// Create an age group from a window width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is negative or NaN.
    pub fn new(width: T) -> Result<Self> {
        if !width.is_comparable() {
            bail!("age group width must be a number, got {width}");
        }

        if width < T::ZERO {
            bail!("age group width must not be negative, got {width}");
        }

        Ok(Self(width))
    }

    /// Validate a sequence of widths, preserving their order and duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid width.
    pub fn from_widths(widths: impl IntoIterator<Item = T>) -> Result<Vec<Self>> {
        widths.into_iter().map(Self::new).collect()
    }

    #[must_use]
    pub const fn width(self) -> T {
        self.0
    }
}

impl<T: Display> Display for AgeGroup<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_zero_and_positive() {
        assert_eq!(AgeGroup::new(0_i64).unwrap().width(), 0);
        assert_eq!(AgeGroup::new(8_i64).unwrap().width(), 8);
        assert!((AgeGroup::new(2.5_f64).unwrap().width() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_negative() {
        let err = AgeGroup::new(-1_i64).unwrap_err();
        assert!(err.to_string().contains("must not be negative"), "{err}");
    }

    #[test]
    fn test_rejects_nan() {
        let _ = AgeGroup::new(f64::NAN).unwrap_err();
    }

    #[test]
    fn test_from_widths_preserves_order_and_duplicates() {
        let groups = AgeGroup::from_widths([8_u32, 1, 5, 5]).unwrap();
        let widths: Vec<_> = groups.iter().map(|g| g.width()).collect();
        assert_eq!(widths, [8, 1, 5, 5]);
    }

    #[test]
    fn test_from_widths_rejects_any_negative() {
        let _ = AgeGroup::from_widths([1_i32, -5, 8]).unwrap_err();
    }

    #[test]
    fn test_display_shows_width() {
        assert_eq!(AgeGroup::new(13_i64).unwrap().to_string(), "13");
    }
}
