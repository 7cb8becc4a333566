//! Stack with a constant-time minimum query
//!
//! `MinStack` keeps two chains of frames: the main chain holding every
//! pushed value, and an auxiliary chain holding each value that was a new
//! minimum (or a tie with it) when pushed.
//!
//! ```text
//!   Operation   Main chain          Aux chain   Comment
//!   new()       EMPTY               EMPTY
//!   push(10)    10                  10          first value always joins aux
//!   push(9)     9->10               9->10       9 <= 10
//!   push(11)    11->9->10           9->10       11 > 9, aux unchanged
//!   push(0)     0->11->9->10        0->9->10    0 <= 9
//!   push(10)    10->0->11->9->10    0->9->10    10 > 0, aux unchanged
//! ```
//!
//! INVARIANTS:
//! - INVARIANT-1: `top` is the sentinel iff the stack holds no values
//! - INVARIANT-2: the aux head holds the minimum of the values on the main chain
//! - INVARIANT-3: frames are never mutated, only the two heads move

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use super::frame::{sentinel, unlink, Entry, Frame, Iter, Link};
use crate::error::StackError;

/// Initializer accepted by [`MinStack::with_initializers`]
#[derive(Debug, Clone, PartialEq)]
pub enum Initializer<T> {
    /// A single value, pushed as is
    Value(T),
    /// A sequence of values, pushed in order
    Values(Vec<T>),
}

/// Linked-frame stack whose `min` runs in O(1) regardless of depth
pub struct MinStack<T> {
    /// Head of the main chain
    top: Link<T>,
    /// Head of the auxiliary chain of successive minimums
    top_min: Link<T>,
}

impl<T> MinStack<T> {
    /// Name reported when the sentinel is offered to `push_entry`
    pub const SENTINEL_NAME: &'static str = "MinStack::SENTINEL";

    /// Create an empty stack
    pub const fn new() -> Self {
        Self {
            top: sentinel(),
            top_min: sentinel(),
        }
    }

    /// True iff no values are on the stack
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Minimum of the values currently on the stack. O(1).
    pub fn min(&self) -> Result<&T, StackError> {
        self.top_min
            .as_deref()
            .map(Frame::value)
            .ok_or(StackError::EmptyStackMin)
    }

    /// Most recently pushed value, without removing it
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(Frame::value)
    }

    /// Value furthest from the top, or `None` for an empty stack. O(depth).
    pub fn bottom(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Iterate over the values from top to bottom without modifying the stack
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.top)
    }
}

impl<T: PartialOrd + Clone> MinStack<T> {
    /// Create a stack holding a single value
    pub fn from_value(value: T) -> Self {
        let mut stack = Self::new();
        // The first push never compares, so it cannot fail.
        stack.push_unchecked(value, true);
        stack
    }

    /// Create a stack by pushing each value in order.
    ///
    /// Iterating the result yields the values in reverse input order.
    pub fn from_values<I>(values: I) -> Result<Self, StackError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut stack = Self::new();
        for value in values {
            stack.push(value)?;
        }
        Ok(stack)
    }

    /// Create a stack from another stack's values in its iteration order.
    ///
    /// The new stack is reversed relative to `other`.
    pub fn from_stack(other: &MinStack<T>) -> Result<Self, StackError> {
        Self::from_values(other.iter().cloned())
    }

    /// Create a stack from zero or one initializer.
    ///
    /// # Errors
    /// `InvalidArgumentCount` if more than one initializer is supplied.
    pub fn with_initializers<I>(args: I) -> Result<Self, StackError>
    where
        I: IntoIterator<Item = Initializer<T>>,
    {
        let mut args: Vec<Initializer<T>> = args.into_iter().collect();
        if args.len() > 1 {
            debug!(received = args.len(), "Rejected MinStack initializers");
            return Err(StackError::InvalidArgumentCount {
                expected: 1,
                received: args.len(),
            });
        }
        match args.pop() {
            None => Ok(Self::new()),
            Some(Initializer::Value(value)) => Ok(Self::from_value(value)),
            Some(Initializer::Values(values)) => Self::from_values(values),
        }
    }

    /// Push a value onto the stack
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        self.push_entry(Entry::Value(value))
    }

    /// Push an entry onto the stack.
    ///
    /// # Errors
    /// - `ProtectedValue` if the entry is the sentinel
    /// - `IncomparableValue` if the value cannot be ordered against the
    ///   current minimum. The stack is left exactly as it was.
    pub fn push_entry(&mut self, entry: Entry<T>) -> Result<(), StackError> {
        let value = match entry {
            Entry::Value(value) => value,
            Entry::Sentinel => {
                debug!(name = Self::SENTINEL_NAME, "Rejected push of protected value");
                return Err(StackError::ProtectedValue {
                    name: Self::SENTINEL_NAME,
                });
            }
        };

        let is_new_min = match self.top_min.as_deref() {
            None => true,
            Some(min) => match value.partial_cmp(min.value()) {
                Some(ordering) => ordering != Ordering::Greater,
                None => {
                    debug!("Rejected push of value incomparable with current minimum");
                    return Err(StackError::IncomparableValue);
                }
            },
        };

        self.push_unchecked(value, is_new_min);
        Ok(())
    }

    fn push_unchecked(&mut self, value: T, is_new_min: bool) {
        if is_new_min {
            self.top_min = Frame::link(self.top_min.take(), value.clone());
        }
        self.top = Frame::link(self.top.take(), value);
    }

    /// Remove and return the top value.
    ///
    /// # Errors
    /// `EmptyStackPop` if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let Some(frame) = self.top.take() else {
            debug!("Rejected pop from empty stack");
            return Err(StackError::EmptyStackPop);
        };
        let (value, subframe) = Frame::split(frame);
        self.top = subframe;

        if self.top.is_none() {
            // Values unequal to themselves (NaN) fail the check below.
            unlink(self.top_min.take());
        } else if self
            .top_min
            .as_deref()
            .is_some_and(|min| *min.value() == value)
        {
            if let Some(min) = self.top_min.take() {
                self.top_min = Frame::into_subframe(min);
            }
        }
        Ok(value)
    }
}

impl<T> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MinStack<T> {
    /// O(1) snapshot sharing every frame with `self`
    fn clone(&self) -> Self {
        Self {
            top: self.top.clone(),
            top_min: self.top_min.clone(),
        }
    }
}

impl<T> Drop for MinStack<T> {
    fn drop(&mut self) {
        unlink(self.top.take());
        unlink(self.top_min.take());
    }
}

impl<T: PartialEq> PartialEq for MinStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for MinStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for MinStack<T> {
    /// Values from top to bottom joined with `->`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a MinStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
