//! Error types used by the hubs and their subscribers.
//!
//! This module defines two error enums:
//!
//! - [`SubscriberError`] — returned by a subscriber's receive capability.
//! - [`HubError`] — returned by `notify` when delivery was aborted.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! Detaching an unknown subscriber is not an error and has no variant here.

use std::any::Any;

use thiserror::Error;

/// # Errors produced by a subscriber.
///
/// A subscriber returns [`SubscriberError::Fail`] to report that it could not
/// handle an event. [`SubscriberError::Panicked`] is produced by the hub itself
/// when a subscriber panics and panic capture is enabled.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscriberError {
    /// The subscriber could not handle the event.
    #[error("subscriber failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The subscriber panicked while handling the event.
    #[error("subscriber panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl SubscriberError {
    /// Shorthand for [`SubscriberError::Fail`].
    ///
    /// # Example
    /// ```
    /// use herald::SubscriberError;
    ///
    /// let err = SubscriberError::fail("out of mana");
    /// assert_eq!(err.as_label(), "subscriber_failed");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        SubscriberError::Fail {
            error: error.into(),
        }
    }

    /// Builds a [`SubscriberError::Panicked`] from a panic payload.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let info = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        SubscriberError::Panicked { info }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SubscriberError::Fail { .. } => "subscriber_failed",
            SubscriberError::Panicked { .. } => "subscriber_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SubscriberError::Fail { error } => format!("error: {error}"),
            SubscriberError::Panicked { info } => format!("panic: {info}"),
        }
    }
}

/// # Errors produced by `notify`.
///
/// Delivery is fail-fast: the first failing subscriber aborts the call and
/// every subscriber registered after it is skipped.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HubError {
    /// A subscriber failed; delivery stopped at `position`.
    #[error("subscriber {subscriber:?} at position {position} failed: {source}")]
    SubscriberFailed {
        /// Name of the failing subscriber.
        subscriber: String,
        /// Zero-based position of the subscriber in delivery order.
        position: usize,
        /// What the subscriber reported.
        #[source]
        source: SubscriberError,
    },
}

impl HubError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use herald::{HubError, SubscriberError};
    ///
    /// let err = HubError::SubscriberFailed {
    ///     subscriber: "archer".into(),
    ///     position: 2,
    ///     source: SubscriberError::fail("no arrows"),
    /// };
    /// assert_eq!(err.as_label(), "hub_subscriber_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HubError::SubscriberFailed { .. } => "hub_subscriber_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HubError::SubscriberFailed {
                subscriber,
                position,
                source,
            } => format!(
                "delivery aborted at {subscriber} (#{position}); {}",
                source.as_message()
            ),
        }
    }

    /// Returns the error reported by the failing subscriber.
    pub fn subscriber_error(&self) -> &SubscriberError {
        match self {
            HubError::SubscriberFailed { source, .. } => source,
        }
    }

    /// Returns the delivery position of the failing subscriber.
    pub fn position(&self) -> usize {
        match self {
            HubError::SubscriberFailed { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_payload_str() {
        let err = SubscriberError::from_panic(Box::new("boom"));
        assert_eq!(
            err,
            SubscriberError::Panicked {
                info: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_panic_payload_string() {
        let err = SubscriberError::from_panic(Box::new(String::from("formatted boom")));
        assert_eq!(err.as_message(), "panic: formatted boom");
    }

    #[test]
    fn test_panic_payload_unknown() {
        let err = SubscriberError::from_panic(Box::new(42_u8));
        assert_eq!(
            err,
            SubscriberError::Panicked {
                info: "unknown panic".to_string()
            }
        );
    }

    #[test]
    fn test_hub_error_display_names_subscriber() {
        let err = HubError::SubscriberFailed {
            subscriber: "warrior".into(),
            position: 1,
            source: SubscriberError::fail("sword broke"),
        };
        let text = err.to_string();
        assert!(text.contains("\"warrior\""), "{text}");
        assert!(text.contains("position 1"), "{text}");
        assert!(text.contains("sword broke"), "{text}");
        assert_eq!(err.position(), 1);
        assert_eq!(err.subscriber_error().as_label(), "subscriber_failed");
    }
}
