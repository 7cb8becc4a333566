//! Timing `min()` against stack depth
//!
//! Each sample builds a stack of uniform random values in `[0, 1)` and
//! times a single `min()` call on it. A flat runtime across depths is the
//! expected outcome.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::config::SweepConfig;
use crate::domain::MinStack;
use crate::error::{StackError, SweepError};

/// Build a stack of `depth` uniform random values in `[0, 1)`
pub fn random_stack<R: Rng + ?Sized>(depth: usize, rng: &mut R) -> Result<MinStack<f64>, StackError> {
    MinStack::from_values((0..depth).map(|_| rng.gen::<f64>()))
}

/// Wall-clock time of one `min()` call
pub fn time_min<T>(stack: &MinStack<T>) -> Duration {
    let start = Instant::now();
    let _ = black_box(stack.min());
    start.elapsed()
}

/// One timed `min()` call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    pub depth: usize,
    pub runtime: Duration,
}

/// Results of a depth sweep
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub samples: Vec<SweepSample>,
    /// Leave the first sample out of `average`
    pub skip_first_sample: bool,
}

impl SweepReport {
    /// Sample runtimes in seconds
    pub fn runtimes_secs(&self) -> Vec<f64> {
        self.samples
            .iter()
            .map(|sample| sample.runtime.as_secs_f64())
            .collect()
    }

    /// Average runtime in seconds.
    ///
    /// The first call usually runs much slower than the rest, so it is left
    /// out when configured and at least one other sample exists.
    pub fn average(&self) -> Option<f64> {
        let runtimes = self.runtimes_secs();
        match runtimes.split_first() {
            Some((_, rest)) if self.skip_first_sample && !rest.is_empty() => average(rest),
            _ => average(&runtimes),
        }
    }

    /// Largest distance of any sample from `average`
    pub fn max_deviation(&self) -> Option<f64> {
        let avg = self.average()?;
        self.runtimes_secs()
            .into_iter()
            .map(|runtime| (runtime - avg).abs())
            .reduce(f64::max)
    }

    /// Mean distance of the samples from `average`
    pub fn average_abs_deviation(&self) -> Option<f64> {
        let avg = self.average()?;
        let deviations: Vec<f64> = self
            .runtimes_secs()
            .into_iter()
            .map(|runtime| runtime - avg)
            .collect();
        average_abs(&deviations)
    }
}

/// Build one random stack per configured depth and time `min()` on each
pub fn run_sweep<R: Rng + ?Sized>(
    config: &SweepConfig,
    rng: &mut R,
) -> Result<SweepReport, SweepError> {
    config.validate()?;
    debug!(depths = config.depths.len(), "Starting min() depth sweep");

    let mut samples = Vec::with_capacity(config.depths.len());
    for &depth in &config.depths {
        let stack = random_stack(depth, rng)?;
        let runtime = time_min(&stack);
        trace!(depth, runtime_ns = runtime.as_nanos() as u64, "Timed min()");
        samples.push(SweepSample { depth, runtime });
    }

    let report = SweepReport {
        samples,
        skip_first_sample: config.skip_first_sample,
    };
    debug!(
        average_secs = report.average().unwrap_or_default(),
        "Finished min() depth sweep"
    );
    Ok(report)
}

/// Arithmetic mean, `None` for an empty slice
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of absolute values, `None` for an empty slice
pub fn average_abs(values: &[f64]) -> Option<f64> {
    let abs: Vec<f64> = values.iter().map(|v| v.abs()).collect();
    average(&abs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn report(runtimes_ns: &[u64], skip_first_sample: bool) -> SweepReport {
        SweepReport {
            samples: runtimes_ns
                .iter()
                .enumerate()
                .map(|(depth, &ns)| SweepSample {
                    depth,
                    runtime: Duration::from_nanos(ns),
                })
                .collect(),
            skip_first_sample,
        }
    }

    #[test]
    fn test_random_stack_has_requested_depth() {
        let mut rng = StdRng::seed_from_u64(7);
        let stack = random_stack(500, &mut rng).unwrap();

        assert_eq!(stack.iter().count(), 500);
        assert!(stack.iter().all(|v| (0.0..1.0).contains(v)));

        let scan = stack.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(stack.min(), Ok(&scan));
    }

    #[test]
    fn test_random_stack_of_zero_depth_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_stack(0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_run_sweep_samples_every_depth() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = SweepConfig::default().with_depths(vec![0, 1, 25, 625]);

        let report = run_sweep(&config, &mut rng).unwrap();
        let depths: Vec<usize> = report.samples.iter().map(|s| s.depth).collect();
        assert_eq!(depths, vec![0, 1, 25, 625]);
        assert!(report.average().is_some());
    }

    #[test]
    fn test_run_sweep_rejects_invalid_config() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = SweepConfig::default().with_depths(vec![]);
        assert_eq!(run_sweep(&config, &mut rng), Err(SweepError::NoDepths));
    }

    #[test]
    fn test_average_skips_first_sample() {
        let report = report(&[1_000, 10, 20, 30], true);
        let avg = report.average().unwrap();
        assert!((avg - 20e-9).abs() < 1e-15, "Warm-up sample must be excluded, got {avg}");

        let max_dev = report.max_deviation().unwrap();
        assert!((max_dev - 980e-9).abs() < 1e-15, "Deviation still covers the first sample");
    }

    #[test]
    fn test_average_keeps_first_sample_when_configured() {
        let report = report(&[10, 20, 30], false);
        let avg = report.average().unwrap();
        assert!((avg - 20e-9).abs() < 1e-15);

        let abs_dev = report.average_abs_deviation().unwrap();
        assert!((abs_dev - (20e-9 / 3.0)).abs() < 1e-15);
    }

    #[test]
    fn test_average_of_single_sample_uses_it() {
        let report = report(&[50], true);
        assert!((report.average().unwrap() - 50e-9).abs() < 1e-15);
        assert_eq!(SweepReport::default().average(), None);
    }

    #[test]
    fn test_average_helpers() {
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(average_abs(&[-1.0, 1.0, -4.0]), Some(2.0));
    }
}
