//! Search helpers over an ascending array of `u8` child keys.

// Below this many keys a linear scan beats binary search.
const LINEAR_SCAN_MAX: usize = 8;

/// Returns the position of `key` in the sorted `keys`, if present.
#[inline]
pub fn u8_keys_find_key_position_sorted(key: u8, keys: &[u8]) -> Option<usize> {
    if keys.len() <= LINEAR_SCAN_MAX {
        return keys.iter().position(|&k| k == key);
    }
    keys.binary_search(&key).ok()
}

/// Returns the position at which `key` must be inserted to keep `keys` sorted, or `None` if the
/// key is already present.
#[inline]
pub fn u8_keys_find_insert_position_sorted(key: u8, keys: &[u8]) -> Option<usize> {
    if keys.len() <= LINEAR_SCAN_MAX {
        let idx = keys.iter().position(|&k| k >= key).unwrap_or(keys.len());
        return match keys.get(idx) {
            Some(&k) if k == key => None,
            _ => Some(idx),
        };
    }
    keys.binary_search(&key).err()
}
