//! # chain-table
//!
//! A fixed-capacity hash table mapping `i32` keys to `String` values.
//!
//! Each bucket holds a singly linked chain of the entries whose key hashed to
//! it (`key mod capacity`). The capacity is chosen once at construction and the
//! table never rehashes, so lookups stay close to O(1) as long as the caller
//! sizes the table for its dataset.
//!
//! On top of the table, [`HashTable::sorted_keys`] and friends answer ordered
//! queries (successor, predecessor, count between two keys) by sorting the
//! stored keys on demand.
//!
//! ## Example
//!
//! ```rust
//! use chain_table::HashTable;
//!
//! let mut table = HashTable::new(4)?;
//! table.put(1, "one");
//! table.put(5, "five");
//! table.put(9, "nine");
//!
//! assert_eq!(table.get(5), Some("five"));
//! assert_eq!(table.sorted_keys(), vec![1, 5, 9]);
//! assert_eq!(table.next_key(5), Some(9));
//! assert_eq!(table.range_count(9, 1), Some(1));
//! # Ok::<(), chain_table::TableError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
pub mod listing;
mod ordering;

pub use config::TableConfig;
pub use error::{Result, TableError};
pub use listing::{print_sorted_keys, write_sorted_keys};
pub use ordering::merge_sort;

use log::{debug, trace, warn};
use std::mem;

/// Key type stored by [`HashTable`].
pub type Key = i32;

type Link = Option<Box<Entry>>;

struct Entry {
    key: Key,
    value: String,
    next: Link,
}

/// Hash table with a fixed bucket array and chained collision resolution.
///
/// - `put`/`get`/`remove`/`contains` cost O(length of the key's chain)
/// - Colliding keys keep insertion order within their chain
/// - Negative keys are valid: the bucket index is the Euclidean remainder
pub struct HashTable {
    buckets: Vec<Link>,
    count: usize,
    config: TableConfig,
}

impl HashTable {
    /// Create a table with `capacity` empty buckets.
    ///
    /// Fails with [`TableError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::default().with_capacity(capacity))
    }

    pub fn with_config(config: TableConfig) -> Result<Self> {
        if config.capacity == 0 {
            return Err(TableError::InvalidArgument("capacity must be positive"));
        }
        Ok(Self::from_config(config))
    }

    fn from_config(config: TableConfig) -> Self {
        let mut buckets = Vec::with_capacity(config.capacity);
        buckets.resize_with(config.capacity, || None);
        debug!("created hash table with {} buckets", config.capacity);
        Self {
            buckets,
            count: 0,
            config,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of buckets, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket that `key` lives in, always within `0..capacity`.
    #[inline]
    pub fn bucket_index(&self, key: Key) -> usize {
        // A Vec never holds more than isize::MAX elements, so the length fits in i64.
        i64::from(key).rem_euclid(self.buckets.len() as i64) as usize
    }

    /// Entry count divided by bucket count.
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.buckets.len() as f64
    }

    /// Length of the chain in `bucket`, or 0 for an out-of-range bucket.
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.buckets
            .get(bucket)
            .map_or(0, |head| Chain::new(head).count())
    }

    pub fn max_chain_len(&self) -> usize {
        self.buckets
            .iter()
            .map(|head| Chain::new(head).count())
            .max()
            .unwrap_or(0)
    }

    fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain::new(&self.buckets[bucket])
    }

    /// Walk the key's chain and return the link that holds `key`, or the empty
    /// tail link if the key is absent, together with its depth in the chain.
    fn seek_mut(&mut self, key: Key) -> (&mut Link, usize) {
        let bucket = self.bucket_index(key);
        let mut link = &mut self.buckets[bucket];
        let mut depth = 0;
        while link.as_ref().is_some_and(|entry| entry.key != key) {
            link = &mut link.as_mut().expect("link checked non-empty").next;
            depth += 1;
        }
        (link, depth)
    }
}

impl HashTable {
    pub fn get(&self, key: Key) -> Option<&str> {
        self.chain(self.bucket_index(key))
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, key: Key) -> bool {
        self.chain(self.bucket_index(key))
            .any(|entry| entry.key == key)
    }

    /// Insert or overwrite. Returns the previous value if `key` was present.
    ///
    /// New keys are appended at the tail of their chain.
    pub fn put(&mut self, key: Key, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        let (link, depth) = self.seek_mut(key);
        if let Some(entry) = link.as_mut() {
            return Some(mem::replace(&mut entry.value, value));
        }

        *link = Some(Box::new(Entry {
            key,
            value,
            next: None,
        }));
        self.count += 1;

        let chain_len = depth + 1;
        if let Some(threshold) = self.config.long_chain_warning {
            if chain_len > threshold {
                warn!(
                    "bucket {} now chains {} entries (capacity {}, {} entries); consider a larger capacity",
                    self.bucket_index(key),
                    chain_len,
                    self.buckets.len(),
                    self.count
                );
            }
        }
        None
    }

    /// Unlink `key` from its chain and return its value.
    pub fn remove(&mut self, key: Key) -> Option<String> {
        let (link, _) = self.seek_mut(key);
        let removed = link.take()?;
        let Entry { value, next, .. } = *removed;
        // The successor (if any) moves into the slot the removed entry occupied.
        *link = next;
        self.count -= 1;
        trace!("removed key {}, {} entries remain", key, self.count);
        Some(value)
    }

    /// Remove every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            release_chain(bucket.take());
        }
        debug!("cleared {} entries", self.count);
        self.count = 0;
    }

    /// Entries in bucket order, and in insertion order within each chain.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Chain { next: None },
            remaining: self.count,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

/// Drop a chain one entry at a time, so long chains don't recurse.
fn release_chain(mut link: Link) {
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::from_config(TableConfig::default())
    }
}

impl Drop for HashTable {
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            release_chain(bucket.take());
        }
    }
}

impl Clone for HashTable {
    fn clone(&self) -> Self {
        let buckets = self
            .buckets
            .iter()
            .map(|head| {
                let entries: Vec<&Entry> = Chain::new(head).collect();
                entries.into_iter().rev().fold(None, |next, entry| {
                    Some(Box::new(Entry {
                        key: entry.key,
                        value: entry.value.clone(),
                        next,
                    }))
                })
            })
            .collect();
        Self {
            buckets,
            count: self.count,
            config: self.config.clone(),
        }
    }
}

impl std::fmt::Debug for HashTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Into<String>> Extend<(Key, V)> for HashTable {
    fn extend<I: IntoIterator<Item = (Key, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = (Key, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct Chain<'a> {
    next: Option<&'a Entry>,
}

impl<'a> Chain<'a> {
    fn new(head: &'a Link) -> Self {
        Self {
            next: head.as_deref(),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.next?;
        self.next = entry.next.as_deref();
        Some(entry)
    }
}

pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Link>,
    chain: Chain<'a>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Key, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((entry.key, entry.value.as_str()));
            }
            self.chain = Chain::new(self.buckets.next()?);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}


#[cfg(test)]
mod proptests;
