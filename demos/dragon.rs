//! # Example: dragon
//!
//! The dragon is the subject; four heroes observe it.
//!
//! Shows how to:
//! - Implement the [`Observe`] trait on plain structs.
//! - Attach a [`LogWriter`] next to domain subscribers.
//! - Detach a subscriber between two notifications.
//!
//! ## Flow
//! ```text
//! notify("The dragon has appeared!") ──► LogWriter, Mage, Warrior, Archer, Priest
//! detach(archer)
//! notify("The dragon is attacking!") ──► LogWriter, Mage, Warrior, Priest
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example dragon --features logging
//! ```

use std::sync::Arc;

use herald::{Event, Hub, LogWriter, Observe, SubscriberError};

struct Mage;
struct Warrior;
struct Archer;
struct Priest;

impl Observe for Mage {
    fn on_event(&self, ev: &Event) -> Result<(), SubscriberError> {
        println!("Mage: Received event - {}. Preparing spells!", ev.label());
        Ok(())
    }

    fn name(&self) -> &str {
        "mage"
    }
}

impl Observe for Warrior {
    fn on_event(&self, ev: &Event) -> Result<(), SubscriberError> {
        println!("Warrior: Received event - {}. Ready for battle!", ev.label());
        Ok(())
    }

    fn name(&self) -> &str {
        "warrior"
    }
}

impl Observe for Archer {
    fn on_event(&self, ev: &Event) -> Result<(), SubscriberError> {
        println!("Archer: Received event - {}. Ready to shoot arrows!", ev.label());
        Ok(())
    }

    fn name(&self) -> &str {
        "archer"
    }
}

impl Observe for Priest {
    fn on_event(&self, ev: &Event) -> Result<(), SubscriberError> {
        println!("Priest: Received event - {}. Ready to heal!", ev.label());
        Ok(())
    }

    fn name(&self) -> &str {
        "priest"
    }
}

fn main() -> anyhow::Result<()> {
    let archer = Arc::new(Archer);

    let mut dragon = Hub::new();
    dragon.attach(Arc::new(LogWriter::new()));
    dragon.attach(Arc::new(Mage));
    dragon.attach(Arc::new(Warrior));
    dragon.attach(archer.clone());
    dragon.attach(Arc::new(Priest));

    dragon.notify("The dragon has appeared!")?;

    dragon.detach(&archer);
    dragon.notify("The dragon is attacking!")?;

    println!("\nstill listening: {:?}", dragon.names());
    Ok(())
}
