//! chained-hashmap: a single-threaded hash table from `String` keys to
//! arbitrary values, using separate chaining and doubling growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, fully deterministic map whose bucket layout can be
//!   predicted from the keys alone.
//! - Layers:
//!   - `hash`: the polynomial rolling hash (`h = 31 * h + c`) and the
//!     hash-to-bucket mapping. Pure functions, no per-map state.
//!   - `config`: initial bucket count and load factor, validated up front.
//!   - `ChainedHashMap<V>`: the bucket array, entry count and growth.
//!
//! Constraints
//! - Single-threaded: every mutation takes `&mut self`. Callers sharing a
//!   map across threads wrap the whole map in one lock, since growth
//!   touches every bucket.
//! - Unique keys; `set` on a present key overwrites in place.
//! - Bucket counts are powers of two (16 by default) and never shrink.
//!
//! Hashing and overflow semantics
//! - The rolling hash runs in `u64` with wrapping arithmetic over Unicode
//!   scalar values, so it is never negative. With power-of-two bucket
//!   counts the bucket index equals the one an arbitrary-precision hash
//!   would produce.
//! - Each entry stores its hash; growth relocates entries without
//!   rehashing keys.
//!
//! Growth
//! - Before each `set` the map checks `len >= capacity * load_factor` and
//!   doubles until the check passes, then performs the insertion. The
//!   check happens before the key is looked up, so an overwrite at the
//!   threshold also grows.
//! - Growth is a full rehash into a freshly allocated bucket array.
//!
//! Notes and non-goals
//! - Iteration order is bucket order, then insertion order inside a
//!   bucket. It is not insertion order across buckets.
//! - The hash is not collision resistant; chaining handles collisions.
//! - Buckets are private. `buckets()` exposes read-only chains for
//!   inspection.
//! - Absence is `None`. Store `Option<T>` to keep "null" values, and use
//!   `has` to tell them from missing keys.
//! - Growth is logged at `debug` level through the `log` facade.

pub mod chained_hash_map;
mod chained_hash_map_proptest;
pub mod config;
pub mod hash;

// Public surface
pub use chained_hash_map::{ChainedHashMap, Entry};
pub use config::{ConfigError, MapConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
