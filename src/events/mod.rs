//! Notification payloads.
//!
//! ## Contents
//! - [`Event`] text label plus `seq`/`at` metadata
//!
//! Producers build events implicitly through `From<&str>` / `From<String>`
//! when calling `notify`, or explicitly with [`Event::new`] when they want
//! to keep the instance around.

mod event;

pub use event::Event;
