// tests/reverse_parity.rs
// Both engines must agree with slice::reverse for every ceiling in 1..=len.

use ferrous_reverse::{
    DepthCeiling, ReverseError, reverse_iterative, reverse_recursive, suggest_ceiling,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn oracle(src: &[u8]) -> Vec<u8> {
    let mut v = src.to_vec();
    v.reverse();
    v
}

fn iterative(src: &[u8]) -> Vec<u8> {
    let mut dst = vec![0u8; src.len()];
    reverse_iterative(src, &mut dst).expect("iterative reversal");
    dst
}

fn recursive(src: &[u8], ceiling: usize) -> Vec<u8> {
    let mut dst = vec![0u8; src.len()];
    let c = DepthCeiling::new(ceiling as i64).expect("positive ceiling");
    reverse_recursive(src, &mut dst, c).expect("recursive reversal");
    dst
}

#[test]
fn random_buffers_match_oracle_for_every_ceiling() {
    let mut rng = StdRng::seed_from_u64(0xA5A5_5A5A_DEAD_BEEF);
    for len in [1usize, 2, 3, 7, 8, 16, 63, 64, 65, 200] {
        let src: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=255u8)).collect();
        let expected = oracle(&src);
        assert_eq!(iterative(&src), expected, "iterative len={}", len);
        for c in 1..=len {
            assert_eq!(recursive(&src, c), expected, "len={} ceiling={}", len, c);
        }
    }
}

#[test]
fn larger_buffer_at_recommended_ceiling() {
    let mut rng = StdRng::seed_from_u64(42);
    let len = 100_000;
    let src: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=255u8)).collect();
    let c = suggest_ceiling(len);
    assert!(c >= 1);

    let rc = recursive(&src, c);
    assert_eq!(rc, iterative(&src));
    assert_eq!(rc, oracle(&src));
}

#[test]
fn double_reversal_is_identity_for_both_engines() {
    let src = b"Lorem ipsum dolor sit amet,\nconsectetur adipiscing elit.\r\n".to_vec();
    assert_eq!(iterative(&iterative(&src)), src);
    for c in [1, 5, 13, src.len(), src.len() * 3] {
        assert_eq!(recursive(&recursive(&src, c), c), src, "ceiling {}", c);
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(recursive(b"ABCDEFGH", 3), b"HGFEDCBA");
    assert_eq!(iterative(b"ABCDEFGH"), b"HGFEDCBA");
    assert_eq!(recursive(b"A", 1), b"A");
    assert_eq!(recursive(b"A", 50), b"A");
    assert_eq!(recursive(b"ABCDEFGH", 100), recursive(b"ABCDEFGH", 1));
    assert!(recursive(b"", 4).is_empty());
    assert!(iterative(b"").is_empty());
}

#[test]
fn non_positive_ceiling_is_rejected() {
    assert_eq!(DepthCeiling::new(0), Err(ReverseError::InvalidCeiling(0)));
    assert_eq!(DepthCeiling::new(-5), Err(ReverseError::InvalidCeiling(-5)));
}
