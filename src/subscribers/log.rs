//! # LogWriter — simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for test or demo; it never fails.
//!
//! ## Example output
//! ```text
//! [event] seq=0 label="The dragon has appeared!"
//! [event] seq=1 label="The dragon is attacking!"
//! ```

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::Event;
use crate::subscribers::{Observe, Subscribe};

/// Event writer subscriber.
///
/// Implements both [`Observe`] and [`Subscribe`], so the same type can be
/// attached to a [`Hub`](crate::Hub) or an [`AsyncHub`](crate::AsyncHub).
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn line(e: &Event) -> String {
        format!("[event] seq={} label={:?}", e.seq, e.label())
    }
}

impl Observe for LogWriter {
    fn on_event(&self, e: &Event) -> Result<(), SubscriberError> {
        println!("{}", Self::line(e));
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) -> Result<(), SubscriberError> {
        println!("{}", Self::line(e));
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}
