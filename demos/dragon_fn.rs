//! # Example: dragon_fn
//!
//! Same scenario as `dragon`, with closures instead of structs, plus a hero
//! that refuses the second event to show fail-fast delivery.
//!
//! ## Run
//! ```bash
//! cargo run --example dragon_fn
//! ```

use herald::{Event, Hub, HubConfig, HubError, ObserverFn, ObserverRef, SubscriberError};

fn hero(name: &'static str, action: &'static str) -> ObserverRef {
    ObserverFn::arc(name, move |ev: &Event| {
        println!("{name}: Received event - {}. {action}", ev.label());
        Ok(())
    })
}

fn main() -> anyhow::Result<()> {
    let mage = hero("Mage", "Preparing spells!");
    let warrior = hero("Warrior", "Ready for battle!");
    let archer = hero("Archer", "Ready to shoot arrows!");
    let priest = hero("Priest", "Healing allies!");

    let mut dragon = Hub::builder(HubConfig::default())
        .with_subscribers(vec![mage, warrior.clone(), archer.clone(), priest])
        .build();

    dragon.notify("The dragon has appeared!")?;

    dragon.detach(&archer);
    dragon.notify("The dragon is attacking!")?;

    // A coward in second place: everyone after it misses the news.
    let coward: ObserverRef = ObserverFn::arc("Bard", |ev: &Event| {
        Err(SubscriberError::fail(format!("fled from {:?}", ev.label())))
    });
    dragon.detach(&warrior);
    dragon.attach(coward.clone());
    dragon.attach(warrior);

    match dragon.notify("The dragon breathes fire!") {
        Ok(()) => println!("everyone answered"),
        Err(err @ HubError::SubscriberFailed { .. }) => {
            println!("[{}] {}", err.as_label(), err.as_message());
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
