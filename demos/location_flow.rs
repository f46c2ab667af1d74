//! Location flow example for citypref-rs
//!
//! Starts the service the way a browser client does: the location guess runs
//! in the background while the fallback ordering is already readable.
//! A fake resolver stands in for the real geolocation endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use citypref_core::prelude::*;

struct SlowResolver;

#[async_trait]
impl LocationResolver for SlowResolver {
    async fn locate(&self) -> Result<String> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok("Ottawa".into())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    println!("=== citypref-rs Location Flow Example ===\n");

    let prefs = PreferenceService::start(
        PrefConfig::default(),
        Arc::new(MemoryStore::new()),
        Arc::new(SlowResolver),
    );

    println!("Before resolution: {:?}", prefs.cities().first());

    match prefs.wait_for_resolution().await {
        Some(LocationOutcome::Pinned(city)) => println!("Located {city}"),
        Some(other) => println!("No pin: {other:?}"),
        None => println!("Resolution never started"),
    }
    println!("After resolution:  {:?}", prefs.cities().first());
    println!("Persisted: {:?}", prefs.persisted_city());

    Ok(())
}
