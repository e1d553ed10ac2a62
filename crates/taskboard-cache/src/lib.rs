//! # Taskboard Cache
//!
//! Caching layer sitting in front of the relational store: per-entity
//! cache policies with fixed TTLs, session revocation bookkeeping, a
//! fixed-window rate limiter, and operational introspection.
//!
//! Every public operation in this crate is infallible at its boundary.
//! When the cache backend is unreachable, reads degrade to cache misses,
//! writes become no-ops, and session validation / rate limiting fail
//! open. The service stays correct and available with the cache down;
//! only latency and enforcement strictness suffer.

pub mod keys;
mod policy;
mod rate_limit;
mod session;
mod stats;
mod store;

pub use policy::ProjectionCache;
pub use rate_limit::{FixedWindowLimiter, RateLimitDecision};
pub use session::SessionRegistry;
pub use stats::{CacheMonitor, CacheStats, StoreHealth};
pub use store::{CacheStore, RedisStore, RedisStoreParameters};
