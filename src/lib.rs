//! # lrukit
//!
//! A bounded Least-Recently-Used cache for Rust.
//!
//! ## Features
//!
//! - **Hard capacity**: never holds more than the configured number of entries
//! - **O(1) everything**: lookup, promotion, insertion and eviction
//! - **Predictable recency**: `get` and `put` promote; `peek`, `contains`
//!   and misses do not
//! - **Safe internals**: an arena of entries linked by slot handle, no `unsafe`
//! - **Statistics**: hit/miss/eviction counters, optionally published by name
//!   (`stats` feature, on by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use lrukit::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("config", 1);
//! cache.put("session", 2);
//!
//! // Reading "config" makes "session" the next one to go
//! assert_eq!(cache.get(&"config"), Some(&1));
//! cache.put("token", 3);
//!
//! assert!(cache.contains(&"config"));
//! assert!(!cache.contains(&"session"));
//! # Ok::<(), lrukit::CacheError>(())
//! ```
//!
//! ## Invalid Capacity
//!
//! A cache must hold at least one entry:
//!
//! ```rust
//! use lrukit::{CacheError, LruCache};
//!
//! let err = LruCache::<u64, String>::new(0).unwrap_err();
//! assert_eq!(err, CacheError::InvalidArgument { capacity: 0 });
//! ```
//!
//! ## Statistics
//!
//! With the `stats` feature, every cache counts hits, misses and evictions.
//! Register a cache to read its counters by name from elsewhere:
//!
//! ```rust
//! # #[cfg(feature = "stats")]
//! # {
//! use lrukit::{stats_registry, LruCache};
//!
//! let mut cache = LruCache::new(10).unwrap();
//! cache.register_stats("user_profiles");
//!
//! cache.put(42u64, "ada");
//! let _ = cache.get(&42);
//! let _ = cache.get(&7);
//!
//! let stats = stats_registry::get("user_profiles").unwrap();
//! println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
//! assert_eq!(stats.total_accesses(), 2);
//! # stats_registry::unregister("user_profiles");
//! # }
//! ```
//!
//! ## Sharing Across Threads
//!
//! The cache does no locking of its own. Wrap it in the lock of your choice:
//!
//! ```rust
//! use lrukit::LruCache;
//! use std::sync::{Arc, Mutex};
//!
//! let shared = Arc::new(Mutex::new(LruCache::new(64).unwrap()));
//! shared.lock().unwrap().put(1, "one");
//! assert_eq!(shared.lock().unwrap().get(&1), Some(&"one"));
//! ```
//!
//! ## Logging
//!
//! The crate emits `log` records (`debug` on creation, `trace` on every
//! eviction) and installs no logger of its own.

pub use lrukit_core::{CacheError, Iter, Keys, LruCache, Result};

#[cfg(feature = "stats")]
pub use lrukit_core::{stats_registry, CacheStats};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
