//! # Notification hubs.
//!
//! A hub owns an ordered sequence of subscriber handles and fans each event
//! out to them, once per entry, in registration order.
//!
//! ## Components
//! - [`Hub`] drives synchronous [`Observe`](crate::Observe) subscribers inline
//! - [`AsyncHub`] drives [`Subscribe`](crate::Subscribe) subscribers, awaiting each in turn
//! - [`HubBuilder`] pre-populates either hub
//! - [`HubConfig`] shared settings
//! - [`Subject`] attach/detach membership implemented by both hubs
//! - `Roster` the ordered handle sequence both hubs delegate to
//!
//! ## Wiring
//! ```text
//! attach(s) ──► Roster.push(s)            (end of sequence)
//! detach(s) ──► Roster.remove_all(&s)     (identity match, order kept)
//! notify(e) ──► for s in Roster: s.on_event(&e)?   (fail-fast)
//! ```
//!
//! ## Concurrency
//! Hubs hold no locks. Mutation requires `&mut self`; share a hub across
//! threads by wrapping it in your own `Mutex`/`RwLock`.

mod async_hub;
mod builder;
mod config;
#[allow(clippy::module_inception)]
mod hub;
mod roster;
mod subject;

pub use async_hub::AsyncHub;
pub use builder::HubBuilder;
pub use config::{HubConfig, MAX_RESERVED_CAPACITY};
pub use hub::Hub;
pub use subject::Subject;
