// src/bench_opt.rs
//
// Run options for the benchmark shell, filled from the command line.

use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::ReverseError;
use crate::trial::TrialConfig;

/// Benchmark options; defaults come from `defaults.rs`.
#[derive(Debug, Clone)]
pub struct BenchOpt {
    pub ceiling: Option<i64>, // Depth ceiling; None uses the advisor's recommendation
    pub trials: i64,          // Repeats per engine
    pub out_dir: PathBuf,     // Directory receiving the two reversed files
    pub write_outputs: bool,  // Skip writing when false (timing-only runs)
    pub stack_mib: usize,     // Stack of the recursive worker thread, in MiB
    pub guarded: bool,        // Refuse ceilings whose projected frames exceed the stack budget
    pub verbosity: i32,       // 1=error, 2=warning, 3=message, 4+=debug
}

impl Default for BenchOpt {
    fn default() -> Self {
        BenchOpt {
            ceiling: None,
            trials: defaults::TRIALS,
            out_dir: PathBuf::from("."),
            write_outputs: true,
            stack_mib: defaults::STACK_MIB,
            guarded: true,
            verbosity: defaults::VERBOSITY,
        }
    }
}

impl BenchOpt {
    pub fn stack_bytes(&self) -> usize {
        self.stack_mib.saturating_mul(1024 * 1024)
    }

    /// Frame budget handed to the guarded recursive engine, if guarding is on.
    pub fn frame_budget(&self) -> Option<usize> {
        self.guarded
            .then(|| self.stack_bytes() / defaults::FRAME_BYTES_ESTIMATE)
    }

    /// Validate the configured ceiling (or `recommended`) and trial count.
    pub fn trial_config(&self, recommended: usize) -> Result<TrialConfig, ReverseError> {
        let ceiling = self
            .ceiling
            .unwrap_or_else(|| i64::try_from(recommended).unwrap_or(i64::MAX));
        TrialConfig::new(ceiling, self.trials)
    }

    /// `(recursive, iterative)` output paths for `source`.
    pub fn output_paths(&self, source: &Path) -> (PathBuf, PathBuf) {
        let base = output_base_name(source);
        (
            self.out_dir
                .join(format!("{}{}", defaults::RECURSIVE_PREFIX, base)),
            self.out_dir
                .join(format!("{}{}", defaults::ITERATIVE_PREFIX, base)),
        )
    }
}

/// File name the outputs are derived from: `-` maps to `stdin.txt` and a
/// trailing `.gz` is dropped, since outputs are always written uncompressed.
pub fn output_base_name(source: &Path) -> String {
    if source.to_str() == Some("-") {
        return defaults::STDIN_NAME.to_string();
    }

    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| defaults::STDIN_NAME.to_string());

    match name.strip_suffix(".gz") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => name,
    }
}
