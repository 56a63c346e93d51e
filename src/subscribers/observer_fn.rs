//! # Function-backed subscribers (`ObserverFn`, `SubscriberFn`)
//!
//! Closures are a first-class subscriber shape. [`ObserverFn`] wraps a
//! synchronous `Fn(&Event) -> Result<(), SubscriberError>`; [`SubscriberFn`]
//! wraps a closure producing a fresh future per event.
//!
//! Each wrapper carries a name for error reports. Identity for detach is the
//! `Arc` returned by `arc`, so keep a clone of it if you plan to detach later.
//!
//! ## Example
//! ```rust
//! use herald::{Event, Hub, ObserverFn, ObserverRef};
//!
//! let archer: ObserverRef = ObserverFn::arc("archer", |ev: &Event| {
//!     println!("Archer: Received event - {}. Ready to shoot arrows!", ev.label());
//!     Ok(())
//! });
//!
//! let mut dragon = Hub::new();
//! dragon.attach(archer.clone());
//! dragon.notify("The dragon has appeared!").unwrap();
//! assert_eq!(dragon.detach(&archer), 1);
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::Event;
use crate::subscribers::{Observe, Subscribe};

/// Closure-backed synchronous subscriber.
pub struct ObserverFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ObserverFn<F>
where
    F: Fn(&Event) -> Result<(), SubscriberError> + Send + Sync + 'static,
{
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`ObserverFn::arc`] when you immediately need an [`ObserverRef`](crate::ObserverRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Observe for ObserverFn<F>
where
    F: Fn(&Event) -> Result<(), SubscriberError> + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event) -> Result<(), SubscriberError> {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Closure-backed asynchronous subscriber.
///
/// The closure receives an owned [`Event`] (a cheap clone) so the returned
/// future does not borrow from the hub.
pub struct SubscriberFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F, Fut> SubscriberFn<F>
where
    F: Fn(Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), SubscriberError>> + Send + 'static,
{
    /// Creates a new function-backed async subscriber.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the subscriber and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use herald::{Event, Subscribe, SubscriberError, SubscriberFn, SubscriberRef};
    ///
    /// let warrior: SubscriberRef = SubscriberFn::arc("warrior", |ev: Event| async move {
    ///     println!("Warrior: Received event - {}. Ready for battle!", ev.label());
    ///     Ok::<_, SubscriberError>(())
    /// });
    /// assert_eq!(warrior.name(), "warrior");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Subscribe for SubscriberFn<F>
where
    F: Fn(Event) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), SubscriberError>> + Send + 'static,
{
    async fn on_event(&self, event: &Event) -> Result<(), SubscriberError> {
        (self.f)(event.clone()).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_fn_forwards_event_and_result() {
        let ok = ObserverFn::new("ok", |ev: &Event| {
            assert_eq!(ev.label(), "hello");
            Ok(())
        });
        let bad = ObserverFn::new("bad", |_: &Event| Err(SubscriberError::fail("nope")));

        let ev = Event::new("hello");
        assert_eq!(ok.on_event(&ev), Ok(()));
        assert_eq!(bad.on_event(&ev), Err(SubscriberError::fail("nope")));
        assert_eq!(Observe::name(&bad), "bad");
    }

    #[tokio::test]
    async fn test_subscriber_fn_receives_owned_event() {
        let sub = SubscriberFn::new("echo", |ev: Event| async move {
            if ev.label() == "fail" {
                Err(SubscriberError::fail("asked to"))
            } else {
                Ok(())
            }
        });

        assert_eq!(sub.on_event(&Event::new("fine")).await, Ok(()));
        assert_eq!(
            sub.on_event(&Event::new("fail")).await,
            Err(SubscriberError::fail("asked to"))
        );
        assert_eq!(Subscribe::name(&sub), "echo");
    }
}
