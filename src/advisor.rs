// src/advisor.rs
//
// Depth Advisor: recommends a depth ceiling for the bounded recursive engine.
//
// With ceiling k the engine keeps about N/k driver frames alive while one
// segment chain adds up to k more, so the peak is modelled as f(k) = N/k + k.

use crate::defaults::{PROBE_FLOOR, PROBE_SQRT_FACTOR};

#[path = "advisor_test.rs"]
mod advisor_test;

/// Modelled peak frame count for a buffer of `len` bytes reversed with ceiling `k`.
pub fn frame_cost(len: usize, k: usize) -> f64 {
    len as f64 / k as f64 + k as f64
}

/// Exclusive upper bound of the advisor's probe range for `len`.
///
/// Never below `PROBE_FLOOR`; grows as `PROBE_SQRT_FACTOR * ceil(sqrt(len))` so
/// the true optimum (about sqrt(len)) always lies inside the scanned range.
pub fn probe_bound(len: usize) -> usize {
    let root = (len as f64).sqrt().ceil() as usize;
    PROBE_FLOOR.max(root.saturating_mul(PROBE_SQRT_FACTOR))
}

/// Recommend a depth ceiling for a buffer of `len` bytes.
///
/// Scans `k` over the probe range and keeps the first `k` with the strictly
/// lowest `frame_cost`, then steps one below it as a safety margin. The
/// result is always at least 1, including for `len == 0`.
pub fn suggest_ceiling(len: usize) -> usize {
    let mut best_k = 1usize;
    let mut best_cost = f64::INFINITY;

    for k in 1..probe_bound(len) {
        let cost = frame_cost(len, k);
        if cost < best_cost {
            best_cost = cost;
            best_k = k;
        }
    }

    let suggested = best_k.saturating_sub(1).max(1);
    log::debug!(
        "Depth advisor: len={} optimum k={} (cost {:.2}), suggesting {}",
        len,
        best_k,
        best_cost,
        suggested
    );
    suggested
}
