//! # Sequential notification hub for async subscribers.
//!
//! [`AsyncHub`] has the same contract as [`Hub`](crate::Hub) but drives
//! [`Subscribe`] handles. Delivery is strictly sequential:
//!
//! ```text
//! notify(ev)
//!     ├─► sub1.on_event(&ev).await ─► Ok
//!     ├─► sub2.on_event(&ev).await ─► Err ──► return HubError (sub3.. skipped)
//!     └─► sub3.on_event(&ev).await
//! ```
//!
//! There is no queue and no spawned worker: the caller's task runs every
//! subscriber, so the hub works on any executor.
//!
//! ## Panic handling
//! With [`HubConfig::catch_panics`] on, each subscriber call is wrapped with
//! `catch_unwind`, covering both the `on_event` call that builds the future and
//! every poll of it; a panic becomes `SubscriberError::Panicked` and delivery stops.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if subscriber uses `Arc<Mutex<T>>` and panics while holding the lock.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::error::{HubError, SubscriberError};
use crate::events::Event;
use crate::hub::builder::HubBuilder;
use crate::hub::config::HubConfig;
use crate::hub::roster::Roster;
use crate::subscribers::{Subscribe, SubscriberRef};

/// Ordered, fail-fast fan-out over asynchronous subscribers.
pub struct AsyncHub {
    cfg: HubConfig,
    roster: Roster<dyn Subscribe>,
}

impl AsyncHub {
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
    pub fn builder(cfg: HubConfig) -> HubBuilder<dyn Subscribe> {
        HubBuilder::new(cfg)
    }

    /// Appends a subscriber to the end of the delivery order.
    pub fn attach(&mut self, subscriber: SubscriberRef) {
        self.roster.push(subscriber);
    }

    /// Removes every entry of `subscriber`; returns how many were removed.
    pub fn detach<S: ?Sized>(&mut self, subscriber: &Arc<S>) -> usize {
        self.roster.remove_all(subscriber)
    }

    /// Returns `true` if `subscriber` is currently attached.
    pub fn contains<S: ?Sized>(&self, subscriber: &Arc<S>) -> bool {
        self.roster.contains(subscriber)
    }

    /// Delivers `event` to every attached subscriber, awaiting each in turn.
    ///
    /// # Errors
    /// Returns [`HubError::SubscriberFailed`] for the first subscriber that
    /// fails; subscribers after it are not invoked.
    pub async fn notify(&self, event: impl Into<Event>) -> Result<(), HubError> {
        let event = event.into();

        for (position, sub) in self.roster.iter().enumerate() {
            if let Err(source) = self.deliver(sub, &event).await {
                return Err(HubError::SubscriberFailed {
                    subscriber: sub.name().to_owned(),
                    position,
                    source,
                });
            }
        }
        Ok(())
    }

    async fn deliver(&self, sub: &SubscriberRef, event: &Event) -> Result<(), SubscriberError> {
        if !self.cfg.catch_panics {
            return sub.on_event(event).await;
        }
        // on_event itself may panic before returning its future.
        AssertUnwindSafe(async { sub.on_event(event).await })
            .catch_unwind()
            .await
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

impl Default for AsyncHub {
    fn default() -> Self {
        Self::new()
    }
}
