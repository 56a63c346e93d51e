//! # Subscribers: the receive capability of the hubs.
//!
//! A subscriber is anything that can receive an [`Event`](crate::Event) and
//! perform a side effect. Two shapes are supported and are interchangeable:
//!
//! - **Trait objects**: implement [`Observe`] (sync) or [`Subscribe`] (async).
//! - **Closures**: wrap them with [`ObserverFn`] or [`SubscriberFn`].
//!
//! ## Architecture
//! ```text
//!   Hub::notify(ev) ──► Observe::on_event(&ev)      (A, B, C, ... in order)
//!   AsyncHub::notify(ev) ──► Subscribe::on_event(&ev).await   (A, B, C, ...)
//! ```
//!
//! ## Provided implementations
//! - [`LogWriter`] (enabled via `logging` feature) → prints events to stdout

#[cfg(feature = "logging")]
mod log;
mod observe;
mod observer_fn;
mod subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use observe::{Observe, ObserverRef};
pub use observer_fn::{ObserverFn, SubscriberFn};
pub use subscribe::{Subscribe, SubscriberRef};
