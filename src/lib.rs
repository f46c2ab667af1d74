//! citypref-rs
//!
//! Umbrella crate for the demos. Everything lives in `citypref-core`.

pub use citypref_core::*;
