//! Sweep Layer - timing `min()` across stack depths
//!
//! Builds stacks of random values at each configured depth and records how
//! long a single `min()` call takes on each. Plotting the results is left to
//! the caller.

pub mod config;
pub mod timer;

pub use config::{SweepConfig, SweepConfigBuilder, DEFAULT_DEPTH_STEPS, DEFAULT_MAX_DEPTH};
pub use timer::{average, average_abs, random_stack, run_sweep, time_min, SweepReport, SweepSample};
