//! Key hashing and bucket selection.
//!
//! The hash is a polynomial rolling hash over the Unicode scalar values of
//! the key, `h = 31 * h + c`, computed in `u64` with wrapping arithmetic.
//! Wrapping keeps the value non-negative, and since bucket counts are powers
//! of two the selected bucket is the same one an unbounded-integer
//! computation would select.

/// Multiplier of the rolling hash.
pub const MULTIPLIER: u64 = 31;

/// Hashes `key` character by character, wrapping modulo 2^64.
#[inline]
pub fn rolling_hash(key: &str) -> u64 {
    key.chars().fold(0u64, |h, c| {
        h.wrapping_mul(MULTIPLIER).wrapping_add(u64::from(u32::from(c)))
    })
}

/// Maps a hash to a bucket offset in `[0, capacity)`.
///
/// `capacity` must be non-zero.
#[inline]
pub fn bucket_index(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket array must not be empty");
    (hash % capacity as u64) as usize
}
