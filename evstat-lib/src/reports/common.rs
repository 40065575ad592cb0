//! Common utilities shared across report generators.

use core::fmt::Display;

/// Format the earliest counted timestamp of a bucket, using `-` for a window that matches nothing.
pub fn format_since<T: Display>(since: Option<T>) -> String {
    since.map_or_else(|| "-".to_string(), |t| t.to_string())
}
