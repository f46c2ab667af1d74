//! Error handling example for citypref-rs
//!
//! Shows which failures surface (read-only view misuse, bad config) and
//! which are absorbed (storage, network).

use std::sync::Arc;

use citypref_core::prelude::*;

fn main() -> Result<()> {
    println!("=== citypref-rs Error Handling Example ===\n");

    // Example 1: Loading a config that does not exist
    println!("--- Example 1: Loading a missing config ---");
    match PrefConfig::from_path("does-not-exist.json") {
        Ok(_) => println!("✓ Config loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    let prefs = PreferenceService::new(
        PrefConfig::default().non_interactive(),
        Arc::new(FileStore::new("/proc/citypref-cannot-write-here")),
        Arc::new(NoopResolver),
    );

    // Example 2: Writing through a read-only view is a programming error
    println!("--- Example 2: Mutating a read-only view ---");
    let view = prefs.cities();
    match view.try_push("Atlantis") {
        Ok(()) => println!("  pushed?!"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!("  List still has {} cities", view.len());
    println!();

    // Example 3: Storage failures are absorbed
    println!("--- Example 3: Unwritable store ---");
    prefs.choose_city("Ottawa");
    println!("  First city: {:?}", view.first());
    println!("  Persisted:  {:?}", prefs.persisted_city());
    println!();

    // Example 4: Invalid setter input is a no-op
    println!("--- Example 4: Empty backend list ---");
    let changed = prefs.set_cities::<&str>(&[]);
    println!("  changed: {changed}, cities: {}", view.len());

    Ok(())
}
