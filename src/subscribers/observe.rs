//! # Synchronous subscriber trait.
//!
//! [`Observe`] is the receive capability driven by [`Hub`](crate::Hub).
//! It is called inline from `notify`, one subscriber at a time, in registration order.
//!
//! ## Rules
//! - Returning `Err` aborts the current `notify` call; later subscribers are skipped.
//! - Panics are captured as [`SubscriberError::Panicked`] unless
//!   [`HubConfig::catch_panics`](crate::HubConfig::catch_panics) is off.
//! - The hub is borrowed for the whole delivery; a subscriber cannot attach or
//!   detach on the hub that is notifying it.
//!
//! ## Example
//! ```rust
//! use herald::{Event, Observe, SubscriberError};
//!
//! struct Mage;
//!
//! impl Observe for Mage {
//!     fn on_event(&self, ev: &Event) -> Result<(), SubscriberError> {
//!         println!("Mage: Received event - {}. Preparing spells!", ev.label());
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "mage" }
//! }
//! ```

use std::sync::Arc;

use crate::error::SubscriberError;
use crate::events::Event;

/// Synchronous event receiver.
pub trait Observe: Send + Sync + 'static {
    /// Handles a single event.
    ///
    /// The same `event` instance is passed to every subscriber of one `notify` call.
    fn on_event(&self, event: &Event) -> Result<(), SubscriberError>;

    /// Returns the subscriber name used in [`HubError`](crate::HubError) reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a synchronous subscriber.
///
/// Handle identity (the `Arc` allocation) is what [`Hub::detach`](crate::Hub::detach) compares.
pub type ObserverRef = Arc<dyn Observe>;
