//! # Min-Stack
//!
//! Linked-frame stack with a `min` query that runs in constant time,
//! regardless of the depth of the stack.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): the data structure, no I/O
//!   - `Frame`: immutable node shared between chains and snapshots
//!   - `MinStack`: main chain plus an auxiliary chain of successive minimums
//!   - `Iter`: top-to-bottom, non-consuming iteration
//!
//! - **Sweep Layer** (`sweep/`): measurement support
//!   - `SweepConfig` / `SweepConfigBuilder`: depths to time, with validation
//!   - `run_sweep`: builds random stacks and times `min()` on each
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: a stack is empty iff its main head is the sentinel
//! - **INVARIANT-2**: the auxiliary head always holds the current minimum
//! - **INVARIANT-3**: frames are never mutated after creation
//!
//! ## Usage Example
//!
//! ```
//! use min_stack::{MinStack, StackError};
//!
//! let mut stack = MinStack::from_values([10, 9, 11, 0, 10])?;
//! assert_eq!(stack.min()?, &0);
//!
//! assert_eq!(stack.pop()?, 10);
//! assert_eq!(stack.to_string(), "0->11->9->10");
//! # Ok::<(), StackError>(())
//! ```

pub mod domain;
pub mod error;
pub mod sweep;

// Re-exports for convenience
pub use domain::{Entry, Initializer, Iter, MinStack};
pub use error::{StackError, SweepError};
pub use sweep::{
    random_stack, run_sweep, time_min, SweepConfig, SweepConfigBuilder, SweepReport, SweepSample,
};
