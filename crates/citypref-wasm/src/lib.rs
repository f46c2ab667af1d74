//! citypref-wasm — WebAssembly bindings for citypref-core
//!
//! Exposes the city and business-type preference lists to JavaScript. The
//! chosen or inferred city is persisted in `window.localStorage` under the
//! `"city"` key, as a plain string.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`),
//!   including the one-shot IP geolocation guess when no city is stored
//! - Read access: `get_cities()`, `get_business_types()`, `get_city(i)`,
//!   `get_business_type(i)`,
//!   `pinned_city()`, `get_stats()`, `location_state()`
//! - Controlled writes: `set_cities([...])`, `set_business_types([...])`,
//!   `choose_city("Ottawa")`, `forget_city()`
//! - The pure normalizer: `normalize([...], "preferred")`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { get_cities, set_cities } from 'citypref-wasm';
//!
//! async function main() {
//!   await init(); // seeds lists, starts the location guess
//!   console.log(get_cities());
//!
//!   const fetched = await fetch('/api/cities').then(r => r.json());
//!   set_cities(fetched); // re-normalized, persisted city stays first
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Arrays handed back to JS are copies; mutating them does not touch the
//!   lists. Use the setters.
//! - Setters ignore anything that is not a non-empty array of strings.
use std::sync::{Arc, OnceLock};

use wasm_bindgen::prelude::*;

use citypref_core::prelude::*;
use serde_wasm_bindgen::to_value;

/* --------------------------------------------------------------------------
   localStorage gateway
-------------------------------------------------------------------------- */

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Every call looks the storage up again, so disabled storage (privacy
/// mode, sandboxed iframes) reads as "nothing stored" and swallows writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log_absorbed("localStorage access", &e);
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn storage() -> Option<web_sys::Storage> {
        None
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?
            .get_item(key)
            .ok()?
            .filter(|v| !v.trim().is_empty())
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                log_absorbed(&format!("write of `{key}`"), &e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                log_absorbed(&format!("remove of `{key}`"), &e);
            }
        }
    }
}

// Quota and privacy-mode failures land here; the caller never sees them.
#[cfg(target_arch = "wasm32")]
fn log_absorbed(what: &str, err: &JsValue) {
    web_sys::console::debug_2(&format!("citypref: ignoring failed {what}:").into(), err);
}

#[cfg(not(target_arch = "wasm32"))]
fn log_absorbed(_what: &str, _err: &JsValue) {}

/* --------------------------------------------------------------------------
   Static Instance
-------------------------------------------------------------------------- */

static PREFS: OnceLock<PreferenceService> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn init_service() -> PreferenceService {
    let config = PrefConfig::default();
    let resolver: Arc<dyn LocationResolver> = match HttpLocationResolver::from_config(&config) {
        Ok(http) => Arc::new(http),
        Err(e) => {
            web_sys::console::warn_1(&format!("geolocation disabled: {e}").into());
            Arc::new(NoopResolver)
        }
    };
    PreferenceService::new(config, Arc::new(LocalStorageStore), resolver)
}

// Outside the browser there is no storage and no location to guess.
#[cfg(not(target_arch = "wasm32"))]
fn init_service() -> PreferenceService {
    PreferenceService::new(
        PrefConfig::default().non_interactive(),
        Arc::new(MemoryStore::new()),
        Arc::new(NoopResolver),
    )
}

fn prefs() -> &'static PreferenceService {
    PREFS.get_or_init(init_service)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let prefs = prefs();
    web_sys::console::log_1(
        &format!("citypref: {} cities, {} business types", prefs.cities().len(), prefs.business_types().len()).into(),
    );

    if let Ok(task) = prefs.begin_location_resolution() {
        wasm_bindgen_futures::spawn_local(async move {
            if let LocationOutcome::Pinned(city) = task.await {
                web_sys::console::log_1(&format!("citypref: located {city}").into());
            }
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn start() {
    let _ = prefs();
}

/* --------------------------------------------------------------------------
   Read Access
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_cities() -> JsValue {
    to_value(&prefs().cities().to_vec()).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn get_business_types() -> JsValue {
    to_value(&prefs().business_types().to_vec()).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn get_city(index: usize) -> Option<String> {
    prefs().cities().get(index)
}

#[wasm_bindgen]
pub fn get_city_count() -> usize {
    prefs().cities().len()
}

#[wasm_bindgen]
pub fn get_business_type(index: usize) -> Option<String> {
    prefs().business_types().get(index)
}

#[wasm_bindgen]
pub fn get_business_type_count() -> usize {
    prefs().business_types().len()
}

#[wasm_bindgen]
pub fn pinned_city() -> Option<String> {
    prefs().pinned_city()
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    to_value(&prefs().stats()).unwrap_or(JsValue::NULL)
}

/// `"idle"`, `"pending"`, `"pinned:<city>"`, `"skipped:<reason>"` or
/// `"failed"`.
#[wasm_bindgen]
pub fn location_state() -> String {
    let state = prefs().subscribe().borrow().clone();
    match state {
        ResolutionState::Idle => "idle".into(),
        ResolutionState::Pending => "pending".into(),
        ResolutionState::Done(LocationOutcome::Pinned(city)) => format!("pinned:{city}"),
        ResolutionState::Done(LocationOutcome::Skipped(reason)) => {
            format!("skipped:{reason:?}").to_lowercase()
        }
        ResolutionState::Done(LocationOutcome::Failed(_)) => "failed".into(),
    }
}

/* --------------------------------------------------------------------------
   Controlled Writes
-------------------------------------------------------------------------- */

/// `Some` only for a JS array whose elements are all strings.
fn string_array(value: JsValue) -> Option<Vec<String>> {
    if !js_sys::Array::is_array(&value) {
        return None;
    }
    serde_wasm_bindgen::from_value(value).ok()
}

/// Replaces the city list. Non-arrays and empty arrays are ignored.
#[wasm_bindgen]
pub fn set_cities(fetched: JsValue) -> bool {
    string_array(fetched).is_some_and(|list| prefs().set_cities(&list))
}

/// Replaces the business-type list verbatim. Non-arrays and empty arrays
/// are ignored.
#[wasm_bindgen]
pub fn set_business_types(fetched: JsValue) -> bool {
    string_array(fetched).is_some_and(|list| prefs().set_business_types(&list))
}

#[wasm_bindgen]
pub fn choose_city(city: &str) -> bool {
    prefs().choose_city(city)
}

#[wasm_bindgen]
pub fn forget_city() {
    prefs().forget_city()
}

/* --------------------------------------------------------------------------
   Normalizer
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn normalize(raw: JsValue, preferred: Option<String>) -> JsValue {
    let raw = string_array(raw).unwrap_or_default();
    to_value(&normalize_list(&raw, preferred.as_deref())).unwrap_or(JsValue::NULL)
}
