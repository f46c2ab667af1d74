// crates/citypref-core/src/error.rs
use thiserror::Error;

/// Errors produced by the preference resolver.
///
/// Only [`PrefError::ImmutableView`] is ever returned to consumers of the
/// list views. Storage and lookup failures are absorbed where they happen
/// and degrade to "no preference" / "keep the current ordering".
#[derive(Debug, Error)]
pub enum PrefError {
    /// A structural write was attempted through a read-only list view.
    #[error("list view is read-only: `{op}` is not permitted, use the service setters")]
    ImmutableView { op: &'static str },

    #[error("preference storage unavailable: {0}")]
    Storage(String),

    #[error("geolocation request failed: {0}")]
    Network(String),

    #[error("geolocation response unusable: {0}")]
    MalformedResponse(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PrefError {
    pub(crate) fn immutable(op: &'static str) -> Self {
        PrefError::ImmutableView { op }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for PrefError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            PrefError::MalformedResponse(e.to_string())
        } else {
            PrefError::Network(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, PrefError>;
