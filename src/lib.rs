pub mod advisor; // Depth Advisor: recommended ceiling for a buffer length
pub mod bench; // Subcommand entry points (load, run, write)
pub mod bench_opt;
pub mod defaults;
pub mod error;
pub mod iterative; // Iterative Reverser
pub mod recursive; // Bounded Recursive Reverser (driver + segment helper)
pub mod session; // Interactive prompt loop
pub mod trial; // Timed trial rounds over both engines
pub mod utils;

pub use advisor::suggest_ceiling;
pub use error::ReverseError;
pub use iterative::reverse_iterative;
pub use recursive::{
    DepthCeiling, RecursionStats, reverse_recursive, reverse_recursive_guarded,
};
