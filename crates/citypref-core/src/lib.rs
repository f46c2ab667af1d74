// crates/citypref-core/src/lib.rs

//! # citypref-core
//!
//! City and business-type preference lists for a city-based social client.
//!
//! The city list is kept deduplicated (case-insensitively) and alphabetical,
//! with the user's persisted choice, or failing that a one-shot IP
//! geolocation guess, pinned to the front. Consumers get read-only
//! [`ListView`]s; the only writers are the [`PreferenceService`] setters.
//!
//! ```rust
//! use std::sync::Arc;
//! use citypref_core::prelude::*;
//!
//! let store = Arc::new(MemoryStore::with_value(CITY_KEY, "Vancouver"));
//! let config = PrefConfig {
//!     seed_cities: vec!["toronto".into(), "vancouver".into(), "calgary".into()],
//!     ..PrefConfig::default()
//! };
//! let prefs = PreferenceService::new(config, store, Arc::new(NoopResolver));
//!
//! assert_eq!(prefs.cities(), ["vancouver", "calgary", "toronto"]);
//! assert!(prefs.cities().try_push("ottawa").is_err());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod list;
pub mod locate;
pub mod normalize;
pub mod prelude;
pub mod service;
pub mod store;
pub mod text;

// Re-exports
pub use crate::common::ListStats;
pub use crate::config::PrefConfig;
pub use crate::error::{PrefError, Result};
pub use crate::list::{ListView, PreferenceList};
pub use crate::normalize::normalize_list;
pub use crate::service::{LocationOutcome, PreferenceService, ResolutionState, SkipReason};
