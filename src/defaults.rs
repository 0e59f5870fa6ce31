// src/defaults.rs

// Depth Advisor
/// Lower bound of the advisor's probe range; the range grows with sqrt(N) past this.
pub const PROBE_FLOOR: usize = 20_000;
/// Multiplier applied to ceil(sqrt(N)) when scaling the probe range.
pub const PROBE_SQRT_FACTOR: usize = 4;

// Trial Constants
pub const TRIALS: i64 = 1;

// Stack Constants
/// Stack reserved for the recursive worker thread, in MiB.
pub const STACK_MIB: usize = 64;
/// Conservative per-frame stack cost used to turn a stack size into a frame budget.
/// Unoptimised builds use noticeably larger frames than release builds.
pub const FRAME_BYTES_ESTIMATE: usize = 256;

// Output Constants
pub const RECURSIVE_PREFIX: &str = "rcReverse_";
pub const ITERATIVE_PREFIX: &str = "itReverse_";
pub const STDIN_NAME: &str = "stdin.txt";

// Other Constants
pub const VERBOSITY: i32 = 3;
