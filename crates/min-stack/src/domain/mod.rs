//! Domain Layer - the stack and its frames
//!
//! This layer contains:
//! - Immutable linked frames and their iterator
//! - The min-tracking stack built on two frame chains
//!
//! RULES:
//! - No I/O operations
//! - No locking; callers serialize shared access

pub mod frame;
pub mod min_stack;

pub use frame::{Entry, Frame, Iter, Link};
pub use min_stack::{Initializer, MinStack};
