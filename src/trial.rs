// src/trial.rs
//
// Times repeated runs of both engines over the same source buffer.
//
// Iterative trials run on the calling thread. Recursive trials run on a
// single-worker rayon pool whose stack size is chosen by the caller, so the
// stack the recursion can use does not depend on the platform's main-thread
// default. A stack overflow on that worker still aborts the process.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use crate::error::{ReverseError, Result};
use crate::iterative::reverse_iterative;
use crate::recursive::{
    DepthCeiling, RecursionStats, projected_frames, reverse_recursive_guarded,
};
use crate::utils::cputime;

/// Ceiling and repeat count for one benchmarking round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    pub ceiling: DepthCeiling,
    pub trials: NonZeroUsize,
}

impl TrialConfig {
    pub fn new(ceiling: i64, trials: i64) -> Result<Self> {
        let ceiling = DepthCeiling::new(ceiling)?;
        let trials = usize::try_from(trials)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ReverseError::InvalidTrialCount(trials))?;
        Ok(TrialConfig { ceiling, trials })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timing {
    pub wall: Duration,
    pub cpu_secs: f64,
}

#[derive(Debug, Clone)]
pub struct TrialReport {
    pub len: usize,
    pub config: TrialConfig,
    pub iterative: Timing,
    pub recursive: Timing,
    pub recursion: RecursionStats,
}

impl TrialReport {
    /// Wall seconds the iterative engine saved over the recursive one (negative if slower).
    pub fn iterative_lead_secs(&self) -> f64 {
        self.recursive.wall.as_secs_f64() - self.iterative.wall.as_secs_f64()
    }

    /// Result banner for one round.
    pub fn render(&self, name: &str) -> String {
        const RULE: &str = "******************************************************************";
        format!(
            "{rule}\n\
             {name} has been reversed iteratively and recursively {n} times.\n\
             Iterative Time: {it:.6}\n\
             Recursive Time: {rc:.6}\n\
             The Iterative test is {lead:.6} seconds faster.\n\
             {rule}\n",
            rule = RULE,
            name = name,
            n = self.config.trials,
            it = self.iterative.wall.as_secs_f64(),
            rc = self.recursive.wall.as_secs_f64(),
            lead = self.iterative_lead_secs(),
        )
    }
}

/// Runs benchmarking rounds; owns the stack-sized worker for recursive trials.
pub struct TrialRunner {
    pool: rayon::ThreadPool,
    frame_budget: Option<usize>,
}

impl TrialRunner {
    pub fn new(
        stack_bytes: usize,
        frame_budget: Option<usize>,
    ) -> std::result::Result<Self, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .stack_size(stack_bytes)
            .thread_name(|_| "recursive-reverse".to_string())
            .build()?;
        log::debug!(
            "Recursive worker ready: stack={} bytes, frame budget={:?}",
            stack_bytes,
            frame_budget
        );
        Ok(TrialRunner { pool, frame_budget })
    }

    pub fn frame_budget(&self) -> Option<usize> {
        self.frame_budget
    }

    /// Reverse `src` into `it_dst` and `rc_dst`, `config.trials` times per engine.
    ///
    /// Length and frame-budget preconditions are checked before either engine runs.
    pub fn run(
        &self,
        src: &[u8],
        it_dst: &mut [u8],
        rc_dst: &mut [u8],
        config: TrialConfig,
    ) -> Result<TrialReport> {
        for dst in [&*it_dst, &*rc_dst] {
            if dst.len() != src.len() {
                return Err(ReverseError::LengthMismatch {
                    src: src.len(),
                    dst: dst.len(),
                });
            }
        }
        if let Some(budget) = self.frame_budget {
            let projected = projected_frames(src.len(), config.ceiling);
            if projected > budget {
                return Err(ReverseError::StackBudgetExceeded { projected, budget });
            }
        }

        let trials = config.trials.get();
        log::debug!(
            "Running {} trials per engine on {} bytes (ceiling {})",
            trials,
            src.len(),
            config.ceiling
        );

        // Iterative trials
        let start_cpu = cputime();
        let start_wall = Instant::now();
        for _ in 0..trials {
            reverse_iterative(src, it_dst)?;
            std::hint::black_box(&*it_dst);
        }
        let iterative = Timing {
            wall: start_wall.elapsed(),
            cpu_secs: cputime() - start_cpu,
        };

        // Recursive trials
        let budget = self.frame_budget;
        let (recursive, recursion) = self.pool.install(|| -> Result<(Timing, RecursionStats)> {
            let mut stats = RecursionStats::default();
            let start_cpu = cputime();
            let start_wall = Instant::now();
            for _ in 0..trials {
                stats = reverse_recursive_guarded(src, rc_dst, config.ceiling, budget)?;
                std::hint::black_box(&*rc_dst);
            }
            let timing = Timing {
                wall: start_wall.elapsed(),
                cpu_secs: cputime() - start_cpu,
            };
            Ok((timing, stats))
        })?;

        log::info!(
            "Iterative: {:.3} CPU sec, {:.3} real sec",
            iterative.cpu_secs,
            iterative.wall.as_secs_f64()
        );
        log::info!(
            "Recursive: {:.3} CPU sec, {:.3} real sec (peak {} frames)",
            recursive.cpu_secs,
            recursive.wall.as_secs_f64(),
            recursion.peak_frames
        );

        Ok(TrialReport {
            len: src.len(),
            config,
            iterative,
            recursive,
            recursion,
        })
    }
}
