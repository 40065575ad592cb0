use core::fmt::{Debug, Display};
use core::ops::Sub;
use core::str::FromStr;

/// A numeric point in time (or time delta) such as a Unix timestamp.
///
/// Implemented for the primitive integer and floating-point types. Widths and
/// timestamps handed to the bucketer must share the same unit.
pub trait TimeValue: Copy + PartialOrd + Sub<Output = Self> + FromStr + Display + Debug {
    /// The zero delta, used to reject negative age-group widths.
    const ZERO: Self;

    /// Whether the value can take part in ordered comparisons (false for NaN).
    fn is_comparable(self) -> bool;

    /// Parse a textual timestamp, trimming surrounding whitespace.
    ///
    /// Returns `None` for empty, malformed, or NaN input.
    fn parse_time(text: &str) -> Option<Self> {
        text.trim().parse::<Self>().ok().filter(|value| value.is_comparable())
    }
}

macro_rules! impl_time_value {
    (int: $($ty:ty),+) => {
        $(
            impl TimeValue for $ty {
                const ZERO: Self = 0;

                fn is_comparable(self) -> bool {
                    true
                }
            }
        )+
    };
    (float: $($ty:ty),+) => {
        $(
            impl TimeValue for $ty {
                const ZERO: Self = 0.0;

                fn is_comparable(self) -> bool {
                    !self.is_nan()
                }
            }
        )+
    };
}

impl_time_value!(int: i32, i64, u32, u64);
impl_time_value!(float: f32, f64);
