use serde::{Deserialize, Serialize};

/// Snapshot of both lists, returned by [`crate::PreferenceService::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStats {
    pub cities: usize,
    pub business_types: usize,
    /// Head of the city list when it is pinned.
    pub pinned: Option<String>,
}
