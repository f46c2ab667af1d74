// crates/citypref-core/src/list.rs

//! Shared preference lists and the read-only views handed to consumers.
//!
//! A [`PreferenceList`] owns the backing storage. Consumers only ever get a
//! [`ListView`], which reads through to the same storage and rejects every
//! structural write with [`PrefError::ImmutableView`]. Replacement happens
//! wholesale under a single write guard, so a reader never sees a drained
//! or half-filled list.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{PrefError, Result};
use crate::normalize::normalize_list;
use crate::text::{equals_folded, fold_case, non_empty};

#[derive(Debug, Default)]
struct Backing {
    items: Vec<String>,
    pinned: Option<String>,
}

fn read(lock: &RwLock<Backing>) -> RwLockReadGuard<'_, Backing> {
    // Writers never panic mid-replacement, so a poisoned lock still holds
    // a complete list.
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write(lock: &RwLock<Backing>) -> RwLockWriteGuard<'_, Backing> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

/// Owner of one ordered token list (cities or business types).
#[derive(Debug, Default)]
pub struct PreferenceList {
    inner: Arc<RwLock<Backing>>,
}

impl PreferenceList {
    /// A list holding `items` exactly as given.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = Self::default();
        list.replace(items.into_iter().map(Into::into).collect());
        list
    }

    /// A list holding the normalized form of `raw` with an optional pin.
    pub fn normalized<I, S>(raw: I, preferred: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = Self::default();
        list.renormalize(raw, preferred);
        list
    }

    /// A read-only handle onto this list's storage.
    pub fn view(&self) -> ListView {
        ListView {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Replaces the contents wholesale, order untouched, and clears the pin.
    pub fn replace(&self, items: Vec<String>) {
        let mut guard = write(&self.inner);
        guard.items = items;
        guard.pinned = None;
    }

    /// Normalizes `raw` (pinning `preferred` when non-empty) and swaps the
    /// result in.
    pub fn renormalize<I, S>(&self, raw: I, preferred: Option<&str>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items = normalize_list(raw, preferred);
        let pinned = preferred.and_then(non_empty).map(fold_case);
        let mut guard = write(&self.inner);
        guard.items = items;
        guard.pinned = pinned;
    }

    /// Pins `preferred` against the list's current contents.
    ///
    /// Read and write happen under one guard, so a concurrent replacement
    /// is either fully seen or applied afterwards, never lost.
    pub fn pin(&self, preferred: &str) {
        let mut guard = write(&self.inner);
        let items = normalize_list(&guard.items, Some(preferred));
        guard.items = items;
        guard.pinned = non_empty(preferred).map(fold_case);
    }

    /// Re-sorts the current contents without a pinned head.
    pub fn unpin(&self) {
        let mut guard = write(&self.inner);
        let items = normalize_list(&guard.items, None);
        guard.items = items;
        guard.pinned = None;
    }

    /// The folded token at the head, if the list is pinned.
    pub fn pinned(&self) -> Option<String> {
        read(&self.inner).pinned.clone()
    }
}

/// Read-only view over a [`PreferenceList`].
///
/// Cloning a view is cheap and every clone observes updates made through
/// the owning service.
#[derive(Clone)]
pub struct ListView {
    inner: Arc<RwLock<Backing>>,
}

impl ListView {
    /// The token at `index`, if any.
    pub fn get(&self, index: usize) -> Option<String> {
        read(&self.inner).items.get(index).cloned()
    }

    pub fn first(&self) -> Option<String> {
        self.get(0)
    }

    /// Number of tokens currently held.
    pub fn len(&self) -> usize {
        read(&self.inner).items.len()
    }

    /// Whether the list holds no tokens.
    pub fn is_empty(&self) -> bool {
        read(&self.inner).items.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, token: &str) -> bool {
        read(&self.inner)
            .items
            .iter()
            .any(|s| equals_folded(s, token))
    }

    /// Copies the current contents out.
    pub fn to_vec(&self) -> Vec<String> {
        read(&self.inner).items.clone()
    }

    /// Iterates over a snapshot taken at call time.
    pub fn iter(&self) -> std::vec::IntoIter<String> {
        self.to_vec().into_iter()
    }

    /// The folded token at the head, if the list is pinned.
    pub fn pinned(&self) -> Option<String> {
        read(&self.inner).pinned.clone()
    }

    // ---------------------------------------------------------------------
    // Structural writes: always rejected.
    // ---------------------------------------------------------------------

    pub fn try_set(&self, _index: usize, _value: impl Into<String>) -> Result<()> {
        Err(PrefError::immutable("set"))
    }

    pub fn try_push(&self, _value: impl Into<String>) -> Result<()> {
        Err(PrefError::immutable("push"))
    }

    pub fn try_remove(&self, _index: usize) -> Result<String> {
        Err(PrefError::immutable("remove"))
    }

    pub fn try_truncate(&self, _len: usize) -> Result<()> {
        Err(PrefError::immutable("truncate"))
    }

    pub fn try_clear(&self) -> Result<()> {
        Err(PrefError::immutable("clear"))
    }
}

impl fmt::Debug for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(read(&self.inner).items.iter()).finish()
    }
}

impl PartialEq<[&str]> for ListView {
    fn eq(&self, other: &[&str]) -> bool {
        read(&self.inner).items.iter().eq(other.iter().copied())
    }
}

impl<const N: usize> PartialEq<[&str; N]> for ListView {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

impl IntoIterator for &ListView {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
