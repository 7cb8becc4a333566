//! Depth-sweep configuration and validation
//!
//! # Example
//!
//! ```
//! use min_stack::SweepConfigBuilder;
//!
//! let config = SweepConfigBuilder::new()
//!     .depths(vec![1, 10, 100])
//!     .skip_first_sample(false)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.depths.len(), 3);
//! ```

use crate::error::SweepError;
use serde::{Deserialize, Serialize};

/// Number of powers of five timed by default (`5^0 ..= 5^9`)
pub const DEFAULT_DEPTH_STEPS: u32 = 10;

/// Largest depth accepted by default
pub const DEFAULT_MAX_DEPTH: usize = 9_765_625; // 5^10

/// Configuration for timing `min()` against stack depth
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Stack depths to build and time, in order
    pub depths: Vec<usize>,
    /// Upper bound on any single depth
    pub max_depth: usize,
    /// Leave the first (warm-up) sample out of the average
    pub skip_first_sample: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            depths: (0..DEFAULT_DEPTH_STEPS).map(|i| 5usize.pow(i)).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            skip_first_sample: true,
        }
    }
}

impl SweepConfig {
    /// Create a new configuration with validation
    pub fn new(
        depths: Vec<usize>,
        max_depth: usize,
        skip_first_sample: bool,
    ) -> Result<Self, SweepError> {
        let config = Self {
            depths,
            max_depth,
            skip_first_sample,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the sweep bounds
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.max_depth == 0 {
            return Err(SweepError::InvalidParameters(
                "max_depth cannot be 0".to_string(),
            ));
        }

        if self.depths.is_empty() {
            return Err(SweepError::NoDepths);
        }

        if let Some(&depth) = self.depths.iter().find(|&&d| d > self.max_depth) {
            return Err(SweepError::DepthTooLarge {
                depth,
                max: self.max_depth,
            });
        }

        Ok(())
    }

    /// Builder-style method to set depths
    pub fn with_depths(mut self, depths: Vec<usize>) -> Self {
        self.depths = depths;
        self
    }

    /// Builder-style method to set the depth cap
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }
}

/// Builder for SweepConfig with validation
#[derive(Default)]
pub struct SweepConfigBuilder {
    depths: Option<Vec<usize>>,
    max_depth: Option<usize>,
    skip_first_sample: Option<bool>,
}

impl SweepConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the depths to time
    pub fn depths(mut self, depths: Vec<usize>) -> Self {
        self.depths = Some(depths);
        self
    }

    /// Set depths to `base^0 .. base^(steps - 1)`
    pub fn geometric_depths(mut self, base: usize, steps: u32) -> Self {
        self.depths = Some((0..steps).map(|i| base.saturating_pow(i)).collect());
        self
    }

    /// Set the largest depth accepted
    pub fn max_depth(mut self, max: usize) -> Self {
        self.max_depth = Some(max);
        self
    }

    /// Whether the first sample is left out of the average
    pub fn skip_first_sample(mut self, skip: bool) -> Self {
        self.skip_first_sample = Some(skip);
        self
    }

    /// Build the SweepConfig, validating all parameters
    pub fn build(self) -> Result<SweepConfig, SweepError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> SweepConfig {
        let defaults = SweepConfig::default();

        SweepConfig {
            depths: self.depths.unwrap_or(defaults.depths),
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            skip_first_sample: self.skip_first_sample.unwrap_or(defaults.skip_first_sample),
        }
    }
}
