use super::TimeValue;
use serde::{Deserialize, Serialize};

/// Anything that can report the time at which an event occurred.
///
/// Returning `None` marks the event as malformed; the bucketer skips such events.
pub trait Timestamped<T> {
    fn timestamp(&self) -> Option<T>;
}

/// A single event row as read from a delimited file.
///
/// The timestamp is kept as text and only parsed when the bucketer asks for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub category: Option<String>,
    pub timestamp: Option<String>,
}

impl EventRecord {
    #[must_use]
    pub fn new(category: Option<&str>, timestamp: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            timestamp: timestamp.map(str::to_string),
        }
    }
}

impl<T: TimeValue> Timestamped<T> for EventRecord {
    fn timestamp(&self) -> Option<T> {
        self.timestamp.as_deref().and_then(T::parse_time)
    }
}

macro_rules! impl_timestamped {
    ($($ty:ty),+) => {
        $(
            impl Timestamped<$ty> for $ty {
                fn timestamp(&self) -> Option<$ty> {
                    Some(*self).filter(|t| t.is_comparable())
                }
            }

            impl Timestamped<$ty> for Option<$ty> {
                fn timestamp(&self) -> Option<$ty> {
                    self.filter(|t| t.is_comparable())
                }
            }
        )+
    };
}

impl_timestamped!(i32, i64, u32, u64, f32, f64);
