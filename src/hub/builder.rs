//! # Hub builder.
//!
//! [`HubBuilder`] collects subscribers before the hub exists, then attaches
//! them in the order given. One builder type serves both hubs, selected by
//! the erased subscriber type.

use std::sync::Arc;

use crate::hub::{AsyncHub, Hub, HubConfig, Subject};
use crate::subscribers::{Observe, Subscribe};

/// Builder for constructing a pre-populated hub.
///
/// `S` is the erased subscriber type: `dyn Observe` builds a [`Hub`],
/// `dyn Subscribe` builds an [`AsyncHub`]. Building is equivalent to
/// creating an empty hub and attaching the subscribers in order.
pub struct HubBuilder<S: ?Sized> {
    cfg: HubConfig,
    subscribers: Vec<Arc<S>>,
}

impl<S: ?Sized> HubBuilder<S> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: HubConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Appends subscribers, keeping their order.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<S>>) -> Self {
        self.subscribers.extend(subscribers);
        self
    }

    /// Appends a single subscriber.
    pub fn with_subscriber(mut self, subscriber: Arc<S>) -> Self {
        self.subscribers.push(subscriber);
        self
    }
}

impl<S: ?Sized> HubBuilder<S> {
    fn populate<H: Subject<Subscriber = S>>(self, make: impl FnOnce(HubConfig) -> H) -> H {
        let mut hub = make(self.cfg);
        for sub in self.subscribers {
            hub.attach(sub);
        }
        hub
    }
}

impl HubBuilder<dyn Observe> {
    /// Builds and returns the synchronous hub.
    pub fn build(self) -> Hub {
        self.populate(Hub::with_config)
    }
}

impl HubBuilder<dyn Subscribe> {
    /// Builds and returns the asynchronous hub.
    pub fn build(self) -> AsyncHub {
        self.populate(AsyncHub::with_config)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::SubscriberError;
    use crate::events::Event;
    use crate::subscribers::{ObserverFn, ObserverRef, SubscriberFn, SubscriberRef};

    #[test]
    fn test_build_keeps_order_and_config() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let make = |name: &'static str| -> ObserverRef {
            let log = Arc::clone(&log);
            ObserverFn::arc(name, move |_: &Event| {
                log.lock().unwrap().push(name);
                Ok(())
            })
        };

        let cfg = HubConfig {
            capacity: 2,
            catch_panics: false,
        };
        let hub = Hub::builder(cfg.clone())
            .with_subscribers(vec![make("mage"), make("warrior")])
            .with_subscriber(make("priest"))
            .build();

        assert_eq!(hub.config(), &cfg);
        assert_eq!(hub.names(), vec!["mage", "warrior", "priest"]);
        hub.notify("x").unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["mage", "warrior", "priest"]);
    }

    #[tokio::test]
    async fn test_build_async_hub() {
        let quiet: SubscriberRef =
            SubscriberFn::arc("quiet", |_: Event| async { Ok::<_, SubscriberError>(()) });

        let hub = AsyncHub::builder(HubConfig::default())
            .with_subscriber(quiet.clone())
            .with_subscriber(quiet.clone())
            .build();

        assert_eq!(hub.len(), 2);
        assert!(hub.contains(&quiet));
        hub.notify("x").await.unwrap();
    }
}
