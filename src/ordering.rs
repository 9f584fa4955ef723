//! Ordered queries over the keys of a [`HashTable`].
//!
//! The table keeps no ordering of its own, so every query here collects the
//! stored keys and sorts them first: O(n log n) per call, with n = `len()`.

use crate::{HashTable, Key};

/// Sort `keys` ascending with a top-down merge sort.
///
/// Stable, O(n log n) time, one scratch buffer of `keys.len()` elements.
pub fn merge_sort(keys: &mut [Key]) {
    if keys.len() < 2 {
        return;
    }
    let mut scratch = keys.to_vec();
    sort_into(&mut scratch, keys);
}

/// Sort `src` and leave the result in `dst`. Both slices start with the same
/// contents; each level swaps their roles so no copying back is needed.
fn sort_into(src: &mut [Key], dst: &mut [Key]) {
    let len = dst.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (dst_lo, dst_hi) = dst.split_at_mut(mid);
        let (src_lo, src_hi) = src.split_at_mut(mid);
        sort_into(dst_lo, src_lo);
        sort_into(dst_hi, src_hi);
    }
    merge(&src[..mid], &src[mid..], dst);
}

fn merge(left: &[Key], right: &[Key], out: &mut [Key]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // Ties take from the left run.
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

impl HashTable {
    /// All stored keys, ascending.
    pub fn sorted_keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = Vec::with_capacity(self.len());
        keys.extend(self.keys());
        merge_sort(&mut keys);
        keys
    }

    /// Smallest stored key greater than `key`.
    ///
    /// `None` if `key` is not stored or is the largest key.
    pub fn next_key(&self, key: Key) -> Option<Key> {
        let keys = self.sorted_keys();
        let pos = keys.binary_search(&key).ok()?;
        keys.get(pos + 1).copied()
    }

    /// Largest stored key less than `key`.
    ///
    /// `None` if `key` is not stored or is the smallest key.
    pub fn prev_key(&self, key: Key) -> Option<Key> {
        let keys = self.sorted_keys();
        let pos = keys.binary_search(&key).ok()?;
        pos.checked_sub(1).map(|prev| keys[prev])
    }

    /// Number of stored keys strictly between `key1` and `key2`, in either
    /// order. `None` unless both keys are stored.
    pub fn range_count(&self, key1: Key, key2: Key) -> Option<usize> {
        if !self.contains(key1) || !self.contains(key2) {
            return None;
        }
        let (lo, hi) = if key1 <= key2 { (key1, key2) } else { (key2, key1) };
        let keys = self.sorted_keys();
        let start = keys.binary_search(&lo).ok()?;
        let end = keys.binary_search(&hi).ok()?;
        Some((end - start).saturating_sub(1))
    }
}
