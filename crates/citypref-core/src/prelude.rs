//! citypref prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::common::ListStats;
pub use crate::config::{PrefConfig, DEFAULT_BUSINESS_TYPES, DEFAULT_CITIES};
pub use crate::error::{PrefError, Result};
pub use crate::list::{ListView, PreferenceList};
#[cfg(feature = "http")]
pub use crate::locate::HttpLocationResolver;
pub use crate::locate::{LocationResolver, NoopResolver};
pub use crate::normalize::normalize_list;
pub use crate::service::{
    LocationOutcome, LocationTask, PreferenceService, ResolutionState, SkipReason,
};
pub use crate::store::{FileStore, MemoryStore, PreferenceStore, CITY_KEY};
pub use crate::text::{equals_folded, fold_case};
