//! # Events delivered by the hubs.
//!
//! An [`Event`] carries a text label plus ordering metadata. The same
//! instance is handed to every subscriber of one `notify` call, unchanged.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore creation order across hubs.
//!
//! ## Example
//! ```rust
//! use herald::Event;
//!
//! let ev = Event::new("The dragon has appeared!");
//! let next = Event::from("The dragon is attacking!");
//!
//! assert_eq!(ev.label(), "The dragon has appeared!");
//! assert!(next.seq > ev.seq);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Notification payload with metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `label`: the opaque text passed to subscribers
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    label: Arc<str>,
}

impl Event {
    /// Creates a new event with current timestamp and next sequence number.
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            label: label.into(),
        }
    }

    /// Returns the event label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<&str> for Event {
    fn from(label: &str) -> Self {
        Event::new(label)
    }
}

impl From<String> for Event {
    fn from(label: String) -> Self {
        Event::new(label)
    }
}

impl From<Arc<str>> for Event {
    fn from(label: Arc<str>) -> Self {
        Event::new(label)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new("a");
        let b = Event::new("b");
        let c = Event::from(String::from("c"));
        assert!(a.seq < b.seq);
        assert!(b.seq < c.seq);
    }

    #[test]
    fn test_clone_keeps_identity_fields() {
        let ev = Event::new("x");
        let copy = ev.clone();
        assert_eq!(copy.seq, ev.seq);
        assert_eq!(copy.at, ev.at);
        assert_eq!(copy.label(), "x");
    }

    #[test]
    fn test_display_prints_label() {
        assert_eq!(Event::from("The dragon is attacking!").to_string(), "The dragon is attacking!");
    }
}
