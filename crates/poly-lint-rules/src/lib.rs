//! # poly-lint-rules
//!
//! The curated rule catalog: an ordered, immutable list of version-gated
//! rule configurations for the untyped scripting language and its typed
//! superset. Built once on first use and shared by reference; the
//! resolver in `poly-lint-core` merges it into effective rule sets.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;

pub use catalog::{default_catalog, TYPESCRIPT_PLUGIN};
