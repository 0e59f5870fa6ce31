// src/recursive.rs
//
// Bounded Recursive Reverser
//
// Reverses a buffer with two mutually recursive procedures while keeping the
// number of live frames near N/ceiling + ceiling instead of N:
//
//   drive(idx)             <--- one frame per chunk
//       segment(idx, k)    <--- up to `ceiling` frames, unwinds before the next chunk
//       drive(idx - k)
//
// Chunks are taken from the end of the source toward its start. `segment` is
// the only procedure that writes; it borrows exactly one destination chunk and
// hands the borrow back to `drive` when its chain unwinds.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{ReverseError, Result};

#[path = "recursive_test.rs"]
mod recursive_test;

/// Maximum number of nested segment calls before a chunk must unwind.
///
/// Zero and negative values are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepthCeiling(NonZeroUsize);

impl DepthCeiling {
    /// Validate a user-supplied ceiling.
    pub fn new(value: i64) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(DepthCeiling)
            .ok_or(ReverseError::InvalidCeiling(value))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for DepthCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Call accounting for one recursive reversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecursionStats {
    /// Invocations of the outer driver, including the terminal `idx == 0` call.
    pub outer_calls: usize,
    /// Invocations of the segment helper, including each chain's terminal call.
    pub helper_calls: usize,
    /// Highest number of simultaneously live driver + helper frames.
    pub peak_frames: usize,
}

/// Exact peak of live driver + helper frames for `len` bytes at `ceiling`.
///
/// Bounded by `ceil(len / ceiling) + min(ceiling, len) + 1`.
pub fn projected_frames(len: usize, ceiling: DepthCeiling) -> usize {
    if len == 0 {
        return 1;
    }
    let c = ceiling.get();
    let chunks = len.div_ceil(c);
    let last = len - (chunks - 1) * c;

    // Deepest full chunk runs under chunks-1 driver frames; the last chunk under all of them.
    let full_peak = if chunks > 1 { chunks + c } else { 0 };
    full_peak.max(chunks + last + 1)
}

/// Reverse `src` into `dst` with the chunked mutual recursion.
///
/// No frame budget is enforced: a ceiling too large for the current thread's
/// stack overflows it, which aborts the process.
pub fn reverse_recursive(
    src: &[u8],
    dst: &mut [u8],
    ceiling: DepthCeiling,
) -> Result<RecursionStats> {
    reverse_recursive_guarded(src, dst, ceiling, None)
}

/// Like [`reverse_recursive`], but refuses to start when the projected peak
/// frame count exceeds `frame_budget`.
///
/// The ceiling is never capped or adjusted; an over-budget call returns
/// `StackBudgetExceeded` without recursing.
pub fn reverse_recursive_guarded(
    src: &[u8],
    dst: &mut [u8],
    ceiling: DepthCeiling,
    frame_budget: Option<usize>,
) -> Result<RecursionStats> {
    if src.len() != dst.len() {
        return Err(ReverseError::LengthMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }

    if let Some(budget) = frame_budget {
        let projected = projected_frames(src.len(), ceiling);
        if projected > budget {
            return Err(ReverseError::StackBudgetExceeded { projected, budget });
        }
    }

    let mut run = BoundedReversal {
        src,
        ceiling: ceiling.get(),
        depth: 0,
        stats: RecursionStats::default(),
    };
    run.drive(dst, src.len());

    log::trace!(
        "Recursive reversal: len={} ceiling={} outer={} helper={} peak={}",
        src.len(),
        ceiling,
        run.stats.outer_calls,
        run.stats.helper_calls,
        run.stats.peak_frames
    );

    Ok(run.stats)
}

struct BoundedReversal<'a> {
    src: &'a [u8],
    ceiling: usize,
    depth: usize,
    stats: RecursionStats,
}

impl BoundedReversal<'_> {
    #[inline(always)]
    fn enter(&mut self) {
        self.depth += 1;
        if self.depth > self.stats.peak_frames {
            self.stats.peak_frames = self.depth;
        }
    }

    #[inline(always)]
    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Outer driver: `idx` bytes of the source (its prefix) remain unreversed.
    fn drive(&mut self, dst: &mut [u8], idx: usize) {
        self.enter();
        self.stats.outer_calls += 1;

        if idx > 0 {
            let chunk = self.ceiling.min(idx);
            let start = self.src.len() - idx;
            self.segment(&mut dst[start..start + chunk], idx, chunk);
            self.drive(dst, idx - chunk);
        }

        self.leave();
    }

    /// Segment helper: copies `src[idx - 1]` into the next free slot of `out`
    /// and recurses until `count` or `idx` runs out.
    fn segment(&mut self, out: &mut [u8], idx: usize, count: usize) {
        self.enter();
        self.stats.helper_calls += 1;

        if count > 0 && idx > 0 {
            out[out.len() - count] = self.src[idx - 1];
            self.segment(out, idx - 1, count - 1);
        }

        self.leave();
    }
}
