//! Expiring in-memory cache for raw API responses
//!
//! This module memoizes response bodies keyed by request URL so pagination
//! and repeat lookups avoid refetching, and bounds memory by evicting entries
//! older than a configurable interval. The [`Cache`] is the only shared
//! mutable state in the program; the [`Reaper`] sweeps it in the background.

mod reaper;
mod store;

pub use reaper::Reaper;
pub use store::Cache;
