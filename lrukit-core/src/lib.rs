//! # lrukit Core
//!
//! Bounded Least-Recently-Used cache for the lrukit library.
//!
//! [`LruCache`] keeps at most `capacity` entries. Every successful lookup or
//! insert moves the entry to the most-recently-used end; inserting a new key
//! into a full cache evicts the entry at the least-recently-used end.
//!
//! ## Features
//!
//! - **O(1) operations**: hash index plus an index-linked recency list
//! - **No `unsafe`**: entries live in a dense arena and link by slot handle
//! - **Non-mutating queries**: `peek` and `contains` never change recency
//! - **Statistics**: hit/miss/eviction counters and a named registry
//!   (requires the `stats` feature, enabled by default)
//!
//! ## Module Organization
//!
//! - [`LruCache`] - the cache itself
//! - [`Iter`] / [`Keys`] - recency-ordered iterators
//! - [`CacheError`] - construction errors
//! - [`stats_registry`] - process-wide lookup of cache statistics by name
//!
mod cache_entry;
mod error;
mod iter;
mod lru_cache;

#[cfg(feature = "stats")]
mod stats;

#[cfg(feature = "stats")]
pub mod stats_registry;

pub use error::{CacheError, Result};
pub use iter::{Iter, Keys};
pub use lru_cache::LruCache;

#[cfg(feature = "stats")]
pub use stats::CacheStats;
