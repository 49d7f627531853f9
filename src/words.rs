//! Little-endian conversions between byte buffers and 32-bit words.

use crate::{CVBytes, CVWords};
use arrayref::{array_mut_ref, array_ref};

/// Fills `words` from `bytes`, 4 bytes per word, little-endian. A trailing
/// partial word is zero-padded on the high-order side. `bytes` must not hold
/// more than `4 * words.len()` bytes.
#[inline(always)]
pub fn words_from_le_bytes(bytes: &[u8], words: &mut [u32]) {
    debug_assert!(bytes.len() <= 4 * words.len());
    let mut chunks = bytes.chunks_exact(4);
    for (word, chunk) in words.iter_mut().zip(&mut chunks) {
        *word = u32::from_le_bytes(*array_ref!(chunk, 0, 4));
    }
    let remainder = chunks.remainder();
    if !remainder.is_empty() {
        let mut padded = [0; 4];
        padded[..remainder.len()].copy_from_slice(remainder);
        words[bytes.len() / 4] = u32::from_le_bytes(padded);
    }
}

#[inline(always)]
pub fn words_from_le_bytes_32(bytes: &CVBytes) -> CVWords {
    let mut out = [0; 8];
    words_from_le_bytes(bytes, &mut out);
    out
}

#[inline(always)]
pub fn le_bytes_from_words_32(words: &CVWords) -> CVBytes {
    let mut out = [0; 32];
    for (i, word) in words.iter().enumerate() {
        *array_mut_ref!(out, 4 * i, 4) = word.to_le_bytes();
    }
    out
}
