//! Benchmark utilities for min-stack

pub mod utils {
    use min_stack::{random_stack, MinStack, StackError, SweepConfig};
    use tracing_subscriber::EnvFilter;

    /// Install a `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
    ///
    /// Safe to call from every benchmark group; only the first call installs.
    pub fn init_logging() {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init();
    }

    /// Depths to benchmark: the default sweep, trimmed to `max_depth`
    pub fn bench_depths(max_depth: usize) -> Vec<usize> {
        SweepConfig::default()
            .depths
            .into_iter()
            .filter(|&depth| depth <= max_depth)
            .collect()
    }

    /// Random stack of `depth` values from the thread-local RNG
    pub fn generate_random_stack(depth: usize) -> Result<MinStack<f64>, StackError> {
        random_stack(depth, &mut rand::thread_rng())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_bench_depths_respects_cap() {
            assert_eq!(bench_depths(125), vec![1, 5, 25, 125]);
        }

        #[test]
        fn test_generate_random_stack_depth() {
            let stack = generate_random_stack(64).unwrap();
            assert_eq!(stack.iter().count(), 64);
        }
    }
}
