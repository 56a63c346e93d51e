//! # Asynchronous subscriber trait.
//!
//! [`Subscribe`] is the receive capability driven by [`AsyncHub`](crate::AsyncHub).
//! Each subscriber's future is awaited to completion before the next subscriber
//! is invoked, so ordering and fail-fast semantics match the synchronous hub.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use herald::{Event, Subscribe, SubscriberError};
//!
//! struct Priest;
//!
//! #[async_trait]
//! impl Subscribe for Priest {
//!     async fn on_event(&self, ev: &Event) -> Result<(), SubscriberError> {
//!         println!("Priest: Received event - {}. Healing allies!", ev.label());
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "priest" }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::Event;

/// Asynchronous event receiver.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Return `Err` to stop the current delivery; do not panic.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles a single event.
    ///
    /// Called from the `notify` future, never concurrently with another
    /// subscriber of the same hub.
    async fn on_event(&self, event: &Event) -> Result<(), SubscriberError>;

    /// Returns the subscriber name used in [`HubError`](crate::HubError) reports.
    ///
    /// Prefer short, descriptive names (e.g., "audit", "slack").
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to an asynchronous subscriber.
pub type SubscriberRef = Arc<dyn Subscribe>;
