//! Basic usage example for citypref-rs
//!
//! Seeds the lists, pins a city, and swaps in a list "fetched" from a backend.

use std::sync::Arc;

use citypref_core::prelude::*;

fn main() -> Result<()> {
    println!("=== citypref-rs Basic Usage Example ===\n");

    let store = Arc::new(MemoryStore::new());
    let prefs = PreferenceService::new(
        PrefConfig::default().non_interactive(),
        store.clone(),
        Arc::new(NoopResolver),
    );

    // Example 1: The seeded list, alphabetical with nothing pinned
    println!("--- Example 1: Seeded cities ---");
    let cities = prefs.cities();
    for city in cities.iter().take(5) {
        println!("- {city}");
    }
    println!("  ... {} in total\n", cities.len());

    // Example 2: The user picks a city; it moves to the front and is persisted
    println!("--- Example 2: Choosing Vancouver ---");
    prefs.choose_city("Vancouver");
    println!("  First city: {:?}", cities.first());
    println!("  Persisted:  {:?}\n", store.read(CITY_KEY));

    // Example 3: The backend answers with an authoritative list
    println!("--- Example 3: Backend list replaces the seed ---");
    prefs.set_cities(&["Surrey", "Burnaby", "vancouver", "Richmond", "surrey"]);
    for city in &cities {
        println!("- {city}");
    }
    println!();

    // Example 4: Business types are replaced verbatim
    println!("--- Example 4: Business types ---");
    prefs.set_business_types(&["retail", "food"]);
    println!("  {:?}\n", prefs.business_types());

    // Example 5: Stats
    let stats = prefs.stats();
    println!("--- Example 5: Stats ---");
    println!("  Cities: {}", stats.cities);
    println!("  Business types: {}", stats.business_types);
    println!("  Pinned: {:?}", stats.pinned);

    Ok(())
}
