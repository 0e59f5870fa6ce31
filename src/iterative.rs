// src/iterative.rs
//
// Iterative Reverser: a single linear pass, no recursion.

use crate::error::{ReverseError, Result};

/// Write `dst[i] = src[len - 1 - i]` for every position.
///
/// Returns `LengthMismatch` before touching `dst` when the lengths differ.
/// Empty buffers are a no-op.
pub fn reverse_iterative(src: &[u8], dst: &mut [u8]) -> Result<()> {
    if src.len() != dst.len() {
        return Err(ReverseError::LengthMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }

    for (out, &byte) in dst.iter_mut().zip(src.iter().rev()) {
        *out = byte;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_iterative_basic() {
        let src = b"ABCDEFGH";
        let mut dst = [0u8; 8];
        reverse_iterative(src, &mut dst).unwrap();
        assert_eq!(&dst, b"HGFEDCBA");
    }

    #[test]
    fn test_reverse_iterative_single_and_empty() {
        let mut one = [0u8; 1];
        reverse_iterative(b"A", &mut one).unwrap();
        assert_eq!(&one, b"A");

        let mut empty: [u8; 0] = [];
        reverse_iterative(&[], &mut empty).unwrap();
    }

    #[test]
    fn test_reverse_iterative_length_mismatch_leaves_dst_untouched() {
        let mut dst = [7u8; 3];
        let err = reverse_iterative(b"ABCD", &mut dst).unwrap_err();
        assert_eq!(err, ReverseError::LengthMismatch { src: 4, dst: 3 });
        assert_eq!(dst, [7, 7, 7]);
    }

    #[test]
    fn test_reverse_iterative_is_encoding_oblivious() {
        // "é" is two bytes in UTF-8; byte reversal splits it on purpose.
        let src = "aé".as_bytes();
        let mut dst = vec![0u8; src.len()];
        reverse_iterative(src, &mut dst).unwrap();
        assert_eq!(dst, vec![0xA9, 0xC3, b'a']);
    }
}
