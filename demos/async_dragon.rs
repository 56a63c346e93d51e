//! # Example: async_dragon
//!
//! The dragon scenario on an [`AsyncHub`]: subscribers do async work, yet
//! each one finishes before the next is invoked.
//!
//! ## Run
//! ```bash
//! cargo run --example async_dragon
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use herald::{AsyncHub, Event, Subscribe, SubscriberError, SubscriberFn, SubscriberRef};

/// A hero that takes a moment before reacting.
struct Hero {
    name: &'static str,
    action: &'static str,
    windup: Duration,
}

#[async_trait]
impl Subscribe for Hero {
    async fn on_event(&self, ev: &Event) -> Result<(), SubscriberError> {
        tokio::time::sleep(self.windup).await;
        println!("{}: Received event - {}. {}", self.name, ev.label(), self.action);
        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn hero(name: &'static str, action: &'static str, windup_ms: u64) -> SubscriberRef {
    Arc::new(Hero {
        name,
        action,
        windup: Duration::from_millis(windup_ms),
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let archer = hero("Archer", "Ready to shoot arrows!", 50);
    let scribe: SubscriberRef = SubscriberFn::arc("scribe", |ev: Event| async move {
        println!("[scribe] seq={} recorded {:?}", ev.seq, ev.label());
        Ok::<_, SubscriberError>(())
    });

    let mut dragon = AsyncHub::new();
    dragon.attach(scribe);
    dragon.attach(hero("Mage", "Preparing spells!", 200));
    dragon.attach(hero("Warrior", "Ready for battle!", 0));
    dragon.attach(archer.clone());
    dragon.attach(hero("Priest", "Healing allies!", 100));

    dragon.notify("The dragon has appeared!").await?;

    dragon.detach(&archer);
    dragon.notify("The dragon is attacking!").await?;

    println!("\nfinished");
    Ok(())
}
