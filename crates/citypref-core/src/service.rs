// crates/citypref-core/src/service.rs

//! # Preference Service
//!
//! The context object that owns both preference lists and wires them to the
//! persisted-preference store and the location resolver. Hand a clone to
//! every component that needs city or business-type data.
//!
//! Data flow for the city list:
//!
//! ```text
//! seed -> normalize -> pin persisted preference (if any)
//!      -> one-shot location guess (only when nothing is persisted)
//!      -> set_cities(fetched) re-normalizes against the persisted preference
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::common::ListStats;
use crate::config::PrefConfig;
use crate::list::{ListView, PreferenceList};
use crate::locate::LocationResolver;
use crate::store::PreferenceStore;
use crate::text::{fold_case, non_empty};

/// Why a location resolution did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The host is not an interactive client.
    NonInteractive,
    /// A preference is already persisted; it always wins over a guess.
    Persisted,
    /// Resolution was already started by this service.
    AlreadyStarted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationOutcome {
    /// The folded city now heads the list and is persisted.
    Pinned(String),
    Skipped(SkipReason),
    /// Lookup failed; lists and store are untouched.
    Failed(String),
}

/// Progress of the one-shot location resolution, published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionState {
    Idle,
    Pending,
    Done(LocationOutcome),
}

/// The pending location lookup. Drive it on whatever executor the host has.
#[cfg(not(target_arch = "wasm32"))]
pub type LocationTask = Pin<Box<dyn Future<Output = LocationOutcome> + Send + 'static>>;
#[cfg(target_arch = "wasm32")]
pub type LocationTask = Pin<Box<dyn Future<Output = LocationOutcome> + 'static>>;

struct Inner {
    config: PrefConfig,
    cities: PreferenceList,
    business_types: PreferenceList,
    store: Arc<dyn PreferenceStore>,
    resolver: Arc<dyn LocationResolver>,
    started: OnceCell<()>,
    state: watch::Sender<ResolutionState>,
    /// Serializes the persisted-choice check-and-write paths: user choice,
    /// forgetting it, and applying a located city.
    choice: Mutex<()>,
}

/// Shared handle over the city and business-type lists.
#[derive(Clone)]
pub struct PreferenceService {
    inner: Arc<Inner>,
}

impl PreferenceService {
    /// Seeds both lists and pins the persisted city preference, if any.
    ///
    /// No network traffic happens here; see
    /// [`PreferenceService::begin_location_resolution`].
    pub fn new(
        config: PrefConfig,
        store: Arc<dyn PreferenceStore>,
        resolver: Arc<dyn LocationResolver>,
    ) -> Self {
        let persisted = store.read(&config.storage_key);
        let cities = PreferenceList::normalized(&config.seed_cities, persisted.as_deref());
        let business_types = PreferenceList::from_items(config.seed_business_types.clone());
        let (state, _) = watch::channel(ResolutionState::Idle);

        debug!(
            "preference service seeded: {} cities, {} business types, persisted city: {:?}",
            config.seed_cities.len(),
            config.seed_business_types.len(),
            persisted
        );

        Self {
            inner: Arc::new(Inner {
                config,
                cities,
                business_types,
                store,
                resolver,
                started: OnceCell::new(),
                state,
                choice: Mutex::new(()),
            }),
        }
    }

    /// Builds the service and immediately kicks off location resolution on
    /// the current tokio runtime, if there is one.
    #[cfg(all(feature = "runtime", not(target_arch = "wasm32")))]
    pub fn start(
        config: PrefConfig,
        store: Arc<dyn PreferenceStore>,
        resolver: Arc<dyn LocationResolver>,
    ) -> Self {
        let service = Self::new(config, store, resolver);
        service.spawn_location_resolution();
        service
    }

    pub fn config(&self) -> &PrefConfig {
        &self.inner.config
    }

    /// Read-only view of the city list.
    pub fn cities(&self) -> ListView {
        self.inner.cities.view()
    }

    /// Read-only view of the business-type list.
    pub fn business_types(&self) -> ListView {
        self.inner.business_types.view()
    }

    /// The folded city currently pinned to the head of the list.
    pub fn pinned_city(&self) -> Option<String> {
        self.inner.cities.pinned()
    }

    /// The city preference as currently persisted.
    pub fn persisted_city(&self) -> Option<String> {
        self.inner.store.read(&self.inner.config.storage_key)
    }

    pub fn stats(&self) -> ListStats {
        ListStats {
            cities: self.inner.cities.view().len(),
            business_types: self.inner.business_types.view().len(),
            pinned: self.pinned_city(),
        }
    }

    // -----------------------------------------------------------------------
    // Setters
    // -----------------------------------------------------------------------

    /// Replaces the city list with an authoritative list from the backend.
    ///
    /// Empty input is ignored. Otherwise the list is re-normalized with the
    /// persisted preference pinned. Returns whether anything changed.
    pub fn set_cities<S: AsRef<str>>(&self, fetched: &[S]) -> bool {
        if fetched.is_empty() {
            debug!("ignoring empty city list");
            return false;
        }
        let persisted = self.persisted_city();
        self.inner.cities.renormalize(fetched, persisted.as_deref());
        true
    }

    /// Replaces the business-type list wholesale, order and duplicates kept.
    /// Empty input is ignored.
    pub fn set_business_types<S: AsRef<str>>(&self, fetched: &[S]) -> bool {
        if fetched.is_empty() {
            debug!("ignoring empty business-type list");
            return false;
        }
        self.inner
            .business_types
            .replace(fetched.iter().map(|s| s.as_ref().to_owned()).collect());
        true
    }

    /// Records an explicit user choice: persisted and pinned.
    pub fn choose_city(&self, city: &str) -> bool {
        let Some(city) = non_empty(city) else {
            return false;
        };
        let folded = fold_case(city);
        let _choice = self.lock_choice();
        self.inner
            .store
            .write(&self.inner.config.storage_key, &folded);
        self.inner.cities.pin(&folded);
        true
    }

    /// Drops the persisted preference and unpins the list.
    pub fn forget_city(&self) {
        let _choice = self.lock_choice();
        self.inner.store.remove(&self.inner.config.storage_key);
        self.inner.cities.unpin();
    }

    fn lock_choice(&self) -> MutexGuard<'_, ()> {
        self.inner.choice.lock().unwrap_or_else(|e| e.into_inner())
    }

    // -----------------------------------------------------------------------
    // Location resolution
    // -----------------------------------------------------------------------

    /// Runs the one-shot guards synchronously and, if they pass, returns the
    /// lookup as a future. The guards claim the one-shot slot, so every later
    /// call is skipped with [`SkipReason::AlreadyStarted`].
    pub fn begin_location_resolution(&self) -> Result<LocationTask, LocationOutcome> {
        if self.inner.started.set(()).is_err() {
            return Err(LocationOutcome::Skipped(SkipReason::AlreadyStarted));
        }

        let skip = if !self.inner.config.interactive {
            Some(SkipReason::NonInteractive)
        } else if self.persisted_city().is_some() {
            Some(SkipReason::Persisted)
        } else {
            None
        };
        if let Some(reason) = skip {
            debug!("location resolution skipped: {reason:?}");
            let outcome = LocationOutcome::Skipped(reason);
            self.inner
                .state
                .send_replace(ResolutionState::Done(outcome.clone()));
            return Err(outcome);
        }

        self.inner.state.send_replace(ResolutionState::Pending);
        let this = self.clone();
        Ok(Box::pin(async move { this.run_location().await }))
    }

    /// Resolves the location in place and returns the outcome.
    pub async fn resolve_location(&self) -> LocationOutcome {
        match self.begin_location_resolution() {
            Ok(task) => task.await,
            Err(outcome) => outcome,
        }
    }

    /// Fire-and-forget resolution on the current tokio runtime.
    ///
    /// Returns `None` without claiming the one-shot slot when called outside
    /// a runtime, and `None` when the guards skip the lookup.
    #[cfg(all(feature = "runtime", not(target_arch = "wasm32")))]
    pub fn spawn_location_resolution(&self) -> Option<tokio::task::JoinHandle<LocationOutcome>> {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                debug!("no tokio runtime, location resolution not started");
                return None;
            }
        };
        self.begin_location_resolution()
            .ok()
            .map(|task| handle.spawn(task))
    }

    /// Subscribe to resolution progress.
    pub fn subscribe(&self) -> watch::Receiver<ResolutionState> {
        self.inner.state.subscribe()
    }

    /// Waits until resolution finishes. Returns `None` if it was never
    /// started.
    pub async fn wait_for_resolution(&self) -> Option<LocationOutcome> {
        let mut rx = self.subscribe();
        if *rx.borrow() == ResolutionState::Idle {
            return None;
        }
        let state = rx
            .wait_for(|s| matches!(s, ResolutionState::Done(_)))
            .await
            .ok()?;
        match &*state {
            ResolutionState::Done(outcome) => Some(outcome.clone()),
            _ => None,
        }
    }

    async fn run_location(self) -> LocationOutcome {
        let outcome = match self.inner.resolver.locate().await {
            Ok(city) => match non_empty(&city).map(fold_case) {
                Some(folded) => self.apply_located(folded),
                None => {
                    warn!("location lookup returned an empty city");
                    LocationOutcome::Failed("empty city".into())
                }
            },
            Err(e) => {
                warn!("location lookup failed, keeping fallback ordering: {e}");
                LocationOutcome::Failed(e.to_string())
            }
        };
        self.inner
            .state
            .send_replace(ResolutionState::Done(outcome.clone()));
        outcome
    }

    /// Pins and persists a located city unless the user chose one while the
    /// lookup was in flight.
    fn apply_located(&self, folded: String) -> LocationOutcome {
        let _choice = self.lock_choice();
        if let Some(chosen) = self.persisted_city() {
            debug!("discarding located city `{folded}`, `{chosen}` was chosen meanwhile");
            return LocationOutcome::Skipped(SkipReason::Persisted);
        }
        self.inner.cities.pin(&folded);
        self.inner
            .store
            .write(&self.inner.config.storage_key, &folded);
        info!("pinned located city `{folded}`");
        LocationOutcome::Pinned(folded)
    }
}
