//! citypref-cli
//! ============
//!
//! Command-line interface for the `citypref-core` preference resolver.
//!
//! This crate primarily provides a binary (`citypref`). The library target
//! only exists so docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! citypref cities
//! citypref choose Vancouver
//! citypref normalize toronto Toronto calgary --prefer Ottawa
//! citypref --store /tmp/prefs locate
//! ```
//!
//! For programmatic access use the [`citypref-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/holg/citypref-rs>
//! - Core crate: <https://docs.rs/citypref-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]
