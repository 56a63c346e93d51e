//! # Synchronous notification hub.
//!
//! [`Hub`] owns an ordered sequence of [`Observe`] handles and fans each
//! event out to them inline, one at a time, in registration order.
//!
//! ## Rules
//! - `attach` appends; the same handle attached twice is delivered twice.
//! - `detach` removes every entry sharing the handle's allocation; unknown handles are ignored.
//! - `notify` is fail-fast: the first `Err` (or captured panic) is returned
//!   and later subscribers are not invoked.
//! - `notify` borrows `&self` while `attach`/`detach` need `&mut self`, so the
//!   set of receivers is fixed for the duration of a delivery.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use herald::{Event, Hub, Observe, SubscriberError};
//!
//! struct Warrior;
//!
//! impl Observe for Warrior {
//!     fn on_event(&self, ev: &Event) -> Result<(), SubscriberError> {
//!         println!("Warrior: Received event - {}. Ready for battle!", ev.label());
//!         Ok(())
//!     }
//! }
//!
//! let warrior = Arc::new(Warrior);
//! let mut dragon = Hub::new();
//! dragon.attach(warrior.clone());
//! dragon.notify("The dragon has appeared!")?;
//!
//! dragon.detach(&warrior);
//! assert!(dragon.is_empty());
//! # Ok::<(), herald::HubError>(())
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::{HubError, SubscriberError};
use crate::events::Event;
use crate::hub::builder::HubBuilder;
use crate::hub::config::HubConfig;
use crate::hub::roster::Roster;
use crate::subscribers::{Observe, ObserverRef};

/// Ordered, fail-fast fan-out over synchronous subscribers.
pub struct Hub {
    cfg: HubConfig,
    roster: Roster<dyn Observe>,
}

impl Hub {
    /// Creates an empty hub with [`HubConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    /// Creates an empty hub with the given configuration.
    #[must_use]
    pub fn with_config(cfg: HubConfig) -> Self {
        let roster = Roster::new(cfg.reserved_capacity());
        Self { cfg, roster }
    }

    /// Returns a builder for a pre-populated hub.
    pub fn builder(cfg: HubConfig) -> HubBuilder<dyn Observe> {
        HubBuilder::new(cfg)
    }

    /// Appends a subscriber to the end of the delivery order.
    pub fn attach(&mut self, subscriber: ObserverRef) {
        self.roster.push(subscriber);
    }

    /// Removes every entry of `subscriber`; returns how many were removed.
    ///
    /// Accepts the erased [`ObserverRef`] or the concrete `Arc<T>` it was created from.
    pub fn detach<S: ?Sized>(&mut self, subscriber: &Arc<S>) -> usize {
        self.roster.remove_all(subscriber)
    }

    /// Returns `true` if `subscriber` is currently attached.
    pub fn contains<S: ?Sized>(&self, subscriber: &Arc<S>) -> bool {
        self.roster.contains(subscriber)
    }

    /// Delivers `event` to every attached subscriber in registration order.
    ///
    /// # Errors
    /// Returns [`HubError::SubscriberFailed`] for the first subscriber that
    /// fails; subscribers after it are not invoked.
    ///
    /// # Panics
    /// Only when [`HubConfig::catch_panics`] is `false` and a subscriber panics.
    pub fn notify(&self, event: impl Into<Event>) -> Result<(), HubError> {
        let event = event.into();

        for (position, sub) in self.roster.iter().enumerate() {
            self.deliver(sub, &event)
                .map_err(|source| HubError::SubscriberFailed {
                    subscriber: sub.name().to_owned(),
                    position,
                    source,
                })?;
        }
        Ok(())
    }

    fn deliver(&self, sub: &ObserverRef, event: &Event) -> Result<(), SubscriberError> {
        if !self.cfg.catch_panics {
            return sub.on_event(event);
        }
        panic::catch_unwind(AssertUnwindSafe(|| sub.on_event(event)))
            .unwrap_or_else(|payload| Err(SubscriberError::from_panic(payload)))
    }

    /// Returns subscriber names in delivery order.
    pub fn names(&self) -> Vec<&str> {
        self.roster.iter().map(|s| s.name()).collect()
    }

    /// Number of entries (duplicates counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Returns the hub configuration.
    pub fn config(&self) -> &HubConfig {
        &self.cfg
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}
