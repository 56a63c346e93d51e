//! # Subject: the membership side shared by both hubs.
//!
//! [`Subject`] captures what [`Hub`](crate::Hub) and [`AsyncHub`](crate::AsyncHub)
//! have in common: an ordered list of subscriber handles with runtime
//! attach/detach. Delivery stays on the concrete types because `notify` is a
//! plain call on one and a future on the other.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use herald::{Event, Hub, ObserverFn, ObserverRef, Subject};
//!
//! /// Replaces every entry of `old` with one entry of `new` at the end.
//! fn swap<H: Subject>(hub: &mut H, old: &Arc<H::Subscriber>, new: Arc<H::Subscriber>) {
//!     if hub.detach(old) > 0 {
//!         hub.attach(new);
//!     }
//! }
//!
//! let rogue: ObserverRef = ObserverFn::arc("rogue", |_: &Event| Ok(()));
//! let healer: ObserverRef = ObserverFn::arc("healer", |_: &Event| Ok(()));
//!
//! let mut party = Hub::new();
//! party.attach(rogue.clone());
//! swap(&mut party, &rogue, healer.clone());
//! assert!(party.contains(&healer));
//! ```

use std::sync::Arc;

use crate::hub::{AsyncHub, Hub};
use crate::subscribers::{Observe, Subscribe};

/// Ordered subscriber membership with identity-based removal.
pub trait Subject {
    /// Erased subscriber type held by the hub.
    type Subscriber: ?Sized;

    /// Appends a subscriber to the end of the delivery order.
    fn attach(&mut self, subscriber: Arc<Self::Subscriber>);

    /// Removes every entry of `subscriber`; returns how many were removed.
    fn detach<S: ?Sized>(&mut self, subscriber: &Arc<S>) -> usize;

    /// Returns `true` if `subscriber` is currently attached.
    fn contains<S: ?Sized>(&self, subscriber: &Arc<S>) -> bool;

    /// Number of entries (duplicates counted).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Subject for Hub {
    type Subscriber = dyn Observe;

    fn attach(&mut self, subscriber: Arc<dyn Observe>) {
        Hub::attach(self, subscriber);
    }

    fn detach<S: ?Sized>(&mut self, subscriber: &Arc<S>) -> usize {
        Hub::detach(self, subscriber)
    }

    fn contains<S: ?Sized>(&self, subscriber: &Arc<S>) -> bool {
        Hub::contains(self, subscriber)
    }

    fn len(&self) -> usize {
        Hub::len(self)
    }
}

impl Subject for AsyncHub {
    type Subscriber = dyn Subscribe;

    fn attach(&mut self, subscriber: Arc<dyn Subscribe>) {
        AsyncHub::attach(self, subscriber);
    }

    fn detach<S: ?Sized>(&mut self, subscriber: &Arc<S>) -> usize {
        AsyncHub::detach(self, subscriber)
    }

    fn contains<S: ?Sized>(&self, subscriber: &Arc<S>) -> bool {
        AsyncHub::contains(self, subscriber)
    }

    fn len(&self) -> usize {
        AsyncHub::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubscriberError;
    use crate::events::Event;
    use crate::subscribers::{ObserverFn, SubscriberFn};

    /// Attaches `a, b, a`, detaches `a`, and reports what is left.
    fn churn<H: Subject>(hub: &mut H, a: Arc<H::Subscriber>, b: Arc<H::Subscriber>) -> (usize, usize) {
        hub.attach(Arc::clone(&a));
        hub.attach(Arc::clone(&b));
        hub.attach(Arc::clone(&a));
        let removed = hub.detach(&a);
        assert!(!hub.contains(&a));
        assert!(hub.contains(&b));
        (removed, hub.len())
    }

    #[test]
    fn test_hub_membership_through_trait() {
        let a: Arc<dyn Observe> = ObserverFn::arc("a", |_: &Event| Ok(()));
        let b: Arc<dyn Observe> = ObserverFn::arc("b", |_: &Event| Ok(()));

        let mut hub = Hub::new();
        assert!(Subject::is_empty(&hub));
        assert_eq!(churn(&mut hub, a, b), (2, 1));
        assert_eq!(hub.names(), vec!["b"]);
    }

    #[test]
    fn test_async_hub_membership_through_trait() {
        let a: Arc<dyn Subscribe> =
            SubscriberFn::arc("a", |_: Event| async { Ok::<_, SubscriberError>(()) });
        let b: Arc<dyn Subscribe> =
            SubscriberFn::arc("b", |_: Event| async { Ok::<_, SubscriberError>(()) });

        let mut hub = AsyncHub::new();
        assert_eq!(churn(&mut hub, a, b), (2, 1));
        assert_eq!(hub.names(), vec!["b"]);
    }
}
