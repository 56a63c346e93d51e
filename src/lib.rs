//! # herald
//!
//! **Herald** is a small subject/observer notification hub for Rust.
//!
//! A hub owns an ordered list of subscribers and broadcasts events to all of
//! them, one at a time, in registration order. Subscribers can join and leave
//! at runtime; a failing subscriber stops the delivery and the failure is
//! returned to the caller.
//!
//! ## Architecture
//! ```text
//!     producer
//!        │ notify("The dragon has appeared!")
//!        ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Hub / AsyncHub                                          │
//! │  - Roster (ordered Arc handles, duplicates allowed)      │
//! │  - HubConfig (capacity, panic capture)                   │
//! └──────┬──────────────┬──────────────┬──────────────┬──────┘
//!        ▼ 1st          ▼ 2nd          ▼ 3rd          ▼ 4th
//!      mage          warrior        archer         priest
//!   on_event(&ev)  on_event(&ev)  on_event(&ev)  on_event(&ev)
//!                        │
//!                        └─ Err ──► HubError::SubscriberFailed (archer, priest skipped)
//! ```
//!
//! ## Features
//! | Area              | Description                                                | Key types / traits                       |
//! |-------------------|------------------------------------------------------------|------------------------------------------|
//! | **Hubs**          | Ordered fan-out with runtime attach/detach.                | [`Hub`], [`AsyncHub`], [`HubBuilder`]    |
//! | **Subscribers**   | Trait objects or closures, sync or async.                  | [`Observe`], [`Subscribe`], [`ObserverFn`], [`SubscriberFn`] |
//! | **Events**        | Text label with sequence number and timestamp.             | [`Event`]                                |
//! | **Errors**        | Typed, fail-fast delivery errors.                          | [`HubError`], [`SubscriberError`]        |
//! | **Configuration** | Pre-allocation and panic capture.                          | [`HubConfig`]                            |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use herald::{Event, Hub, ObserverFn, ObserverRef};
//!
//! fn hero(name: &'static str, action: &'static str) -> ObserverRef {
//!     ObserverFn::arc(name, move |ev: &Event| {
//!         println!("{name}: Received event - {}. {action}", ev.label());
//!         Ok(())
//!     })
//! }
//!
//! let archer = hero("Archer", "Ready to shoot arrows!");
//!
//! let mut dragon = Hub::new();
//! dragon.attach(hero("Mage", "Preparing spells!"));
//! dragon.attach(hero("Warrior", "Ready for battle!"));
//! dragon.attach(archer.clone());
//! dragon.attach(hero("Priest", "Healing allies!"));
//!
//! dragon.notify("The dragon has appeared!")?;
//!
//! dragon.detach(&archer);
//! dragon.notify("The dragon is attacking!")?;
//! assert_eq!(dragon.names(), vec!["Mage", "Warrior", "Priest"]);
//! # Ok::<(), herald::HubError>(())
//! ```
mod error;
mod events;
mod hub;
mod subscribers;

// ---- Public re-exports ----

pub use error::{HubError, SubscriberError};
pub use events::Event;
pub use hub::{AsyncHub, Hub, HubBuilder, HubConfig, Subject, MAX_RESERVED_CAPACITY};
pub use subscribers::{Observe, ObserverFn, ObserverRef, Subscribe, SubscriberFn, SubscriberRef};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
