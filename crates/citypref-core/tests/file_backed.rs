//! End-to-end behavior of the service over a file-backed preference store.

use std::sync::Arc;

use async_trait::async_trait;
use citypref_core::prelude::*;

struct Located(&'static str);

#[async_trait]
impl LocationResolver for Located {
    async fn locate(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

struct Offline;

#[async_trait]
impl LocationResolver for Offline {
    async fn locate(&self) -> Result<String> {
        Err(PrefError::Network("dns lookup failed".into()))
    }
}

fn config() -> PrefConfig {
    PrefConfig {
        seed_cities: ["toronto", "vancouver", "calgary", "montreal"]
            .map(String::from)
            .to_vec(),
        ..PrefConfig::default()
    }
}

#[tokio::test]
async fn located_city_survives_into_next_session() {
    let dir = tempfile::tempdir().unwrap();

    let first = PreferenceService::new(
        config(),
        Arc::new(FileStore::new(dir.path())),
        Arc::new(Located("Ottawa")),
    );
    assert_eq!(
        first.resolve_location().await,
        LocationOutcome::Pinned("ottawa".into())
    );

    let raw = std::fs::read_to_string(dir.path().join(CITY_KEY)).unwrap();
    assert_eq!(raw, "ottawa");

    // Next session: the persisted value pins the seed and the resolver is
    // never consulted.
    let second = PreferenceService::new(
        config(),
        Arc::new(FileStore::new(dir.path())),
        Arc::new(Located("Calgary")),
    );
    assert_eq!(
        second.cities(),
        ["ottawa", "calgary", "montreal", "toronto", "vancouver"]
    );
    assert_eq!(
        second.resolve_location().await,
        LocationOutcome::Skipped(SkipReason::Persisted)
    );
    assert_eq!(second.pinned_city().as_deref(), Some("ottawa"));
}

#[tokio::test]
async fn offline_session_keeps_alphabetical_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = PreferenceService::new(
        config(),
        Arc::new(FileStore::new(dir.path())),
        Arc::new(Offline),
    );

    let outcome = prefs.resolve_location().await;
    assert!(matches!(outcome, LocationOutcome::Failed(ref e) if e.contains("dns")));
    assert_eq!(prefs.cities(), ["calgary", "montreal", "toronto", "vancouver"]);
    assert!(!dir.path().join(CITY_KEY).exists());
}

#[test]
fn backend_list_replaces_seed_and_keeps_pin() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.write(CITY_KEY, "Halifax");

    let prefs = PreferenceService::new(config(), Arc::new(store), Arc::new(NoopResolver));
    let view = prefs.cities();
    assert_eq!(view.first().as_deref(), Some("halifax"));

    assert!(prefs.set_cities(&["Regina", "halifax", "Edmonton", "REGINA"]));
    assert_eq!(view, ["halifax", "Edmonton", "Regina"]);

    assert!(view.try_set(0, "toronto").is_err());
    assert_eq!(view, ["halifax", "Edmonton", "Regina"]);
}

#[test]
fn unwritable_store_degrades_silently() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let prefs = PreferenceService::new(
        config(),
        Arc::new(FileStore::new(&blocker)),
        Arc::new(NoopResolver),
    );
    assert!(prefs.choose_city("Montreal"));
    assert_eq!(prefs.cities().first().as_deref(), Some("montreal"));
    assert_eq!(prefs.persisted_city(), None);
}
