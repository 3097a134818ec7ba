//! ChainedHashMap: string-keyed table with separate chaining and doubling growth.

use crate::config::{ConfigError, MapConfig};
use crate::hash::{bucket_index, rolling_hash};
use core::fmt;
use core::iter::{Flatten, FusedIterator};
use core::mem;
use log::{debug, trace};

/// A stored key/value pair. Keys are immutable once inserted.
#[derive(Clone)]
pub struct Entry<V> {
    key: String,
    value: V,
    hash: u64,
}

impl<V> Entry<V> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V: fmt::Debug> fmt::Debug for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

type Bucket<V> = Vec<Entry<V>>;

/// Hash table mapping `String` keys to `V`.
///
/// Each bucket is a chain kept in insertion order. Before every `set` the
/// table checks `len >= capacity * load_factor` and doubles the bucket array
/// until the check passes, relocating every entry. Capacity never shrinks.
#[derive(Clone)]
pub struct ChainedHashMap<V> {
    buckets: Vec<Bucket<V>>,
    len: usize,
    load_factor: f64,
}

impl<V> ChainedHashMap<V> {
    /// Empty map with 16 buckets and a 0.75 load factor.
    pub fn new() -> Self {
        Self::with_config(MapConfig::default())
    }

    /// Empty map with at least `capacity` buckets (rounded up to a power of
    /// two). Panics if `capacity` is zero, too large, or too small to hold
    /// one entry at the default load factor.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(MapConfig::default().with_initial_capacity(capacity))
    }

    /// Panics on an invalid configuration; see `try_with_config`.
    pub fn with_config(config: MapConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(m) => m,
            Err(e) => panic!("invalid map configuration: {e}"),
        }
    }

    /// Builds an empty map, reporting invalid parameters as `ConfigError`.
    pub fn try_with_config(config: MapConfig) -> Result<Self, ConfigError> {
        let capacity = config.validate()?;
        Ok(Self {
            buckets: empty_buckets(capacity),
            len: 0,
            load_factor: config.load_factor,
        })
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Growth threshold this map was built with.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Associates `value` with `key`, returning the value it replaced.
    ///
    /// Growth is checked before the key is looked up, so a map sitting at its
    /// threshold grows even when `key` is already present.
    pub fn set<K: Into<String>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key.into();
        while self.at_threshold() {
            self.grow();
        }

        let hash = rolling_hash(&key);
        let idx = bucket_index(hash, self.capacity());
        let bucket = &mut self.buckets[idx];
        if let Some(e) = bucket
            .iter_mut()
            .find(|e| e.hash == hash && e.key == key)
        {
            return Some(mem::replace(&mut e.value, value));
        }
        bucket.push(Entry { key, value, hash });
        self.len += 1;
        None
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.find(key).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let hash = rolling_hash(key);
        let idx = bucket_index(hash, self.capacity());
        self.buckets[idx]
            .iter_mut()
            .find(|e| e.hash == hash && e.key == key)
            .map(|e| &mut e.value)
    }

    /// Presence check. Use this rather than `get` to tell a stored "empty"
    /// value (e.g. `None` in a map of `Option<T>`) apart from a missing key.
    pub fn has(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key` and returns its value. Remaining entries in the bucket
    /// keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &str) -> Option<(String, V)> {
        let hash = rolling_hash(key);
        let idx = bucket_index(hash, self.capacity());
        let bucket = &mut self.buckets[idx];
        let pos = bucket
            .iter()
            .position(|e| e.hash == hash && e.key == key)?;
        let entry = bucket.remove(pos);
        self.len -= 1;
        Some((entry.key, entry.value))
    }

    /// Drops every entry. Capacity is kept.
    pub fn clear(&mut self) {
        trace!(
            "clearing {} entries across {} buckets",
            self.len,
            self.capacity()
        );
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    pub fn keys(&self) -> Keys<'_, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, V> {
        Values { inner: self.iter() }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Key/value pairs in bucket order, then insertion order within a bucket.
    pub fn entries(&self) -> Iter<'_, V> {
        self.iter()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.buckets.iter().flatten(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.buckets.iter_mut().flatten(),
            remaining: self.len,
        }
    }

    /// Read-only view of each bucket's chain, in bucket order.
    pub fn buckets(&self) -> Buckets<'_, V> {
        Buckets {
            it: self.buckets.iter(),
        }
    }

    fn find(&self, key: &str) -> Option<&Entry<V>> {
        let hash = rolling_hash(key);
        let idx = bucket_index(hash, self.capacity());
        self.buckets[idx]
            .iter()
            .find(|e| e.hash == hash && e.key == key)
    }

    #[inline]
    fn at_threshold(&self) -> bool {
        self.len as f64 >= self.capacity() as f64 * self.load_factor
    }

    /// Doubles the bucket array and relocates every entry using its stored
    /// hash. Entries sharing a new bucket keep their previous scan order.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = match old_capacity.checked_mul(2) {
            Some(c) => c,
            None => panic!("capacity overflow"),
        };
        debug!(
            "growing from {} to {} buckets with {} entries",
            old_capacity, new_capacity, self.len
        );

        let mut buckets = empty_buckets(new_capacity);
        for entry in mem::take(&mut self.buckets).into_iter().flatten() {
            buckets[bucket_index(entry.hash, new_capacity)].push(entry);
        }
        self.buckets = buckets;
    }
}

fn empty_buckets<V>(capacity: usize) -> Vec<Bucket<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainedHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for ChainedHashMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for ChainedHashMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

/// Iterator over `(&str, &V)` pairs.
pub struct Iter<'a, V> {
    it: Flatten<core::slice::Iter<'a, Bucket<V>>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.it.next()?;
        self.remaining -= 1;
        Some((e.key.as_str(), &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over `(&str, &mut V)` pairs.
pub struct IterMut<'a, V> {
    it: Flatten<core::slice::IterMut<'a, Bucket<V>>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.it.next()?;
        self.remaining -= 1;
        Some((e.key.as_str(), &mut e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// Owning iterator over `(String, V)` pairs.
pub struct IntoIter<V> {
    it: Flatten<std::vec::IntoIter<Bucket<V>>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.it.next()?;
        self.remaining -= 1;
        Some((e.key, e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

/// Iterator over keys, in the same order as `iter`.
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}
impl<V> FusedIterator for Keys<'_, V> {}

/// Iterator over values, in the same order as `iter`.
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}
impl<V> FusedIterator for Values<'_, V> {}

/// Iterator over mutable values, in the same order as `iter_mut`.
pub struct ValuesMut<'a, V> {
    inner: IterMut<'a, V>,
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}
impl<V> FusedIterator for ValuesMut<'_, V> {}

/// Iterator over bucket chains.
pub struct Buckets<'a, V> {
    it: core::slice::Iter<'a, Bucket<V>>,
}

impl<'a, V> Iterator for Buckets<'a, V> {
    type Item = &'a [Entry<V>];
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(Vec::as_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<V> ExactSizeIterator for Buckets<'_, V> {}
impl<V> FusedIterator for Buckets<'_, V> {}

impl<'a, V> IntoIterator for &'a ChainedHashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut ChainedHashMap<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V> IntoIterator for ChainedHashMap<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            it: self.buckets.into_iter().flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn init_test_logger() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    }

    /// Invariant: every entry sits in the bucket its stored hash selects, and
    /// `len` equals the number of chained entries.
    fn assert_structure<V>(m: &ChainedHashMap<V>) {
        let mut total = 0;
        for (idx, chain) in m.buckets().enumerate() {
            for e in chain {
                assert_eq!(e.hash, rolling_hash(e.key()));
                assert_eq!(bucket_index(e.hash, m.capacity()), idx);
            }
            total += chain.len();
        }
        assert_eq!(total, m.len());
        assert!(m.capacity().is_power_of_two());
    }

    /// Invariant: a fresh map is empty with 16 buckets.
    #[test]
    fn new_map_is_empty() {
        let m: ChainedHashMap<i32> = ChainedHashMap::new();
        assert_eq!(m.len(), 0);
        assert!(m.is_empty());
        assert_eq!(m.capacity(), 16);
        assert_eq!(m.load_factor(), 0.75);
        assert_eq!(m.buckets().len(), 16);
        assert!(m.buckets().all(|b| b.is_empty()));
    }

    /// Invariant: `set` then `get`/`has` observe the value.
    #[test]
    fn set_get_has() {
        let mut m = ChainedHashMap::new();
        assert_eq!(m.set("a", 1), None);
        assert_eq!(m.get("a"), Some(&1));
        assert!(m.has("a"));
        assert!(!m.has("b"));
        assert_eq!(m.get("b"), None);
        assert_structure(&m);
    }

    /// Invariant: overwriting keeps `len` and returns the replaced value.
    #[test]
    fn overwrite_in_place() {
        let mut m = ChainedHashMap::new();
        m.set("k", 1);
        assert_eq!(m.set("k".to_string(), 2), Some(1));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("k"), Some(&2));
    }

    /// Invariant: colliding keys chain in one bucket and resolve by equality.
    #[test]
    fn colliding_keys_share_a_bucket() {
        let mut m = ChainedHashMap::new();
        m.set("Aa", 1);
        m.set("BB", 2);
        let idx = bucket_index(rolling_hash("Aa"), m.capacity());
        let chain = m.buckets().nth(idx).unwrap();
        let keys: Vec<&str> = chain.iter().map(Entry::key).collect();
        assert_eq!(keys, ["Aa", "BB"]);
        assert_eq!(m.get("Aa"), Some(&1));
        assert_eq!(m.get("BB"), Some(&2));

        assert_eq!(m.remove("Aa"), Some(1));
        assert_eq!(m.get("BB"), Some(&2));
        assert!(!m.has("Aa"));
    }

    /// Invariant: removal preserves the order of the rest of the chain.
    #[test]
    fn remove_preserves_chain_order() {
        // "Aa", "BB" and "C#" all hash to 2112.
        let mut m = ChainedHashMap::new();
        for (i, k) in ["Aa", "BB", "C#"].into_iter().enumerate() {
            m.set(k, i);
        }
        assert_eq!(m.remove_entry("BB"), Some(("BB".to_string(), 1)));
        let idx = bucket_index(rolling_hash("Aa"), m.capacity());
        let keys: Vec<&str> = m.buckets().nth(idx).unwrap().iter().map(Entry::key).collect();
        assert_eq!(keys, ["Aa", "C#"]);
        assert_eq!(m.len(), 2);
    }

    /// Invariant: removing an absent key changes nothing.
    #[test]
    fn remove_absent_is_noop() {
        let mut m = ChainedHashMap::new();
        assert_eq!(m.remove("nope"), None);
        m.set("a", 1);
        assert_eq!(m.remove("nope"), None);
        assert_eq!(m.len(), 1);
    }

    /// Invariant: growth is checked before insertion, so the threshold-th
    /// key does not grow the table but the next distinct key does.
    #[test]
    fn grows_at_threshold() {
        init_test_logger();
        let mut m = ChainedHashMap::new();
        for i in 0..12 {
            m.set(format!("key{i}"), i);
        }
        assert_eq!(m.capacity(), 16);
        m.set("key12", 12);
        assert_eq!(m.capacity(), 32);
        assert_eq!(m.len(), 13);
        for i in 0..13 {
            assert_eq!(m.get(&format!("key{i}")), Some(&i));
        }
        assert_structure(&m);
    }

    /// Invariant: a map at its threshold grows on overwrite too, and the
    /// overwrite still lands.
    #[test]
    fn overwrite_at_threshold_grows() {
        let mut m = ChainedHashMap::new();
        for i in 0..12 {
            m.set(format!("key{i}"), i);
        }
        assert_eq!(m.set("key0", 100), Some(0));
        assert_eq!(m.capacity(), 32);
        assert_eq!(m.len(), 12);
        assert_eq!(m.get("key0"), Some(&100));
    }

    /// Invariant: capacity only grows; clear and remove never shrink it.
    #[test]
    fn capacity_is_monotonic() {
        let mut m = ChainedHashMap::new();
        let mut last = m.capacity();
        for i in 0..500 {
            m.set(i.to_string(), i);
            assert!(m.capacity() >= last);
            last = m.capacity();
        }
        assert_eq!(last, 1024);
        for i in 0..500 {
            m.remove(&i.to_string());
        }
        assert_eq!(m.capacity(), 1024);
        m.clear();
        assert_eq!(m.capacity(), 1024);
        assert_structure(&m);
    }

    /// Invariant: with the smallest accepted load factor each insert doubles
    /// at most once and the map stays consistent.
    #[test]
    fn smallest_load_factor_doubles_once_per_insert() {
        let cfg = MapConfig::new()
            .with_initial_capacity(8)
            .with_load_factor(0.125);
        let mut m = ChainedHashMap::with_config(cfg);
        m.set("a", 1);
        assert_eq!(m.capacity(), 8);
        m.set("b", 2);
        assert_eq!(m.capacity(), 16);
        m.set("c", 3);
        assert_eq!(m.capacity(), 32);
        assert_structure(&m);
    }

    /// Invariant: a load factor too small to hold one entry is refused at
    /// construction rather than growing without bound on insert.
    #[test]
    fn tiny_load_factor_is_rejected() {
        let r = ChainedHashMap::<i32>::try_with_config(MapConfig::new().with_load_factor(1e-30));
        assert_eq!(r.err(), Some(ConfigError::InvalidLoadFactor(1e-30)));
    }

    #[test]
    fn with_capacity_rounds_to_power_of_two() {
        let m: ChainedHashMap<()> = ChainedHashMap::with_capacity(100);
        assert_eq!(m.capacity(), 128);
    }

    #[test]
    fn try_with_config_reports_errors() {
        let r = ChainedHashMap::<u8>::try_with_config(MapConfig::new().with_initial_capacity(0));
        assert_eq!(r.err(), Some(ConfigError::ZeroCapacity));
    }

    #[test]
    #[should_panic(expected = "invalid map configuration")]
    fn with_config_panics_on_invalid_load_factor() {
        let _m: ChainedHashMap<u8> =
            ChainedHashMap::with_config(MapConfig::new().with_load_factor(f64::INFINITY));
    }

    /// Invariant: clear empties every bucket and resets `len`.
    #[test]
    fn clear_resets() {
        init_test_logger();
        let mut m = ChainedHashMap::new();
        for i in 0..20 {
            m.set(i.to_string(), i);
        }
        let cap = m.capacity();
        m.clear();
        assert_eq!(m.len(), 0);
        assert_eq!(m.capacity(), cap);
        for i in 0..20 {
            assert!(!m.has(&i.to_string()));
        }
        assert_eq!(m.keys().count(), 0);
        m.set("again", 1);
        assert_eq!(m.len(), 1);
    }

    /// Invariant: a stored `None` is present; `get` yields `Some(&None)`.
    #[test]
    fn null_values_are_distinguishable() {
        let mut m: ChainedHashMap<Option<&str>> = ChainedHashMap::new();
        m.set("nil", None);
        assert!(m.has("nil"));
        assert_eq!(m.get("nil"), Some(&None));
        assert_eq!(m.get("missing"), None);
        assert_eq!(m.remove("nil"), Some(None));
        assert!(!m.has("nil"));
    }

    /// Invariant: empty keys and empty values are ordinary entries.
    #[test]
    fn empty_key_and_value() {
        let mut m = ChainedHashMap::new();
        m.set("", "");
        assert_eq!(m.get(""), Some(&""));
        assert_eq!(m.len(), 1);
    }

    /// Invariant: iteration visits buckets in order, chains in insertion
    /// order, and reports an exact length.
    #[test]
    fn iteration_follows_bucket_order() {
        let mut m = ChainedHashMap::new();
        // buckets (cap 16): "b" -> 2, "a" -> 1, "Aa"/"BB" -> 0
        m.set("b", 2);
        m.set("a", 1);
        m.set("BB", 4);
        m.set("Aa", 3);
        let it = m.entries();
        assert_eq!(it.len(), 4);
        let pairs: Vec<(&str, i32)> = it.map(|(k, v)| (k, *v)).collect();
        assert_eq!(pairs, [("BB", 4), ("Aa", 3), ("a", 1), ("b", 2)]);
        let keys: Vec<&str> = m.keys().collect();
        assert_eq!(keys, ["BB", "Aa", "a", "b"]);
        let values: Vec<i32> = m.values().copied().collect();
        assert_eq!(values, [4, 3, 1, 2]);
    }

    #[test]
    fn mutation_through_iterators_and_get_mut() {
        let mut m: ChainedHashMap<i32> = (0..10).map(|i| (i.to_string(), i)).collect();
        for v in m.values_mut() {
            *v *= 10;
        }
        for (_k, v) in &mut m {
            *v += 1;
        }
        *m.get_mut("3").unwrap() = -1;
        assert_eq!(m.get("3"), Some(&-1));
        assert_eq!(m.get("4"), Some(&41));
        assert!(m.get_mut("missing").is_none());
    }

    #[test]
    fn into_iter_yields_owned_pairs() {
        let m: ChainedHashMap<u32> = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
        let got: BTreeSet<(String, u32)> = m.into_iter().collect();
        let want: BTreeSet<(String, u32)> = [("x", 1), ("y", 2), ("z", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(got, want);
    }

    /// Invariant: entry debug output shows only the key and value.
    #[test]
    fn entry_debug_hides_hash() {
        let mut m = ChainedHashMap::new();
        m.set("a", 1);
        let idx = bucket_index(rolling_hash("a"), m.capacity());
        let e = &m.buckets().nth(idx).unwrap()[0];
        assert_eq!(format!("{e:?}"), r#"Entry { key: "a", value: 1 }"#);
    }

    /// Invariant: derived iterators stay exhausted once they return `None`.
    #[test]
    fn derived_iterators_are_fused() {
        fn assert_fused<I: FusedIterator>(_: &I) {}
        let mut m: ChainedHashMap<i32> = [("a", 1)].into_iter().collect();
        let mut keys = m.keys();
        assert_fused(&keys);
        assert_eq!(keys.next(), Some("a"));
        assert_eq!(keys.next(), None);
        assert_eq!(keys.next(), None);
        assert_fused(&m.values());
        assert_fused(&m.buckets());
        let mut vm = m.values_mut();
        assert_fused(&vm);
        assert!(vm.next().is_some());
        assert!(vm.next().is_none());
        assert!(vm.next().is_none());
    }

    #[test]
    fn debug_renders_as_map() {
        let mut m = ChainedHashMap::new();
        m.set("a", 1);
        assert_eq!(format!("{m:?}"), r#"{"a": 1}"#);
    }

    #[test]
    fn clone_is_independent() {
        let mut m = ChainedHashMap::new();
        m.set("a", 1);
        let mut c = m.clone();
        c.set("a", 2);
        c.set("b", 3);
        assert_eq!(m.get("a"), Some(&1));
        assert_eq!(m.len(), 1);
        assert_eq!(c.len(), 2);
    }
}
