//! Immutable stack frames
//!
//! A frame holds one value and a shared link to the frame beneath it. The
//! link is never rewritten once the frame exists, so any number of stack
//! heads (snapshots, the auxiliary minimum chain) can point into the same
//! chain.
//!
//! INVARIANTS:
//! - The sentinel is the empty link (`None`) and is the bottom of every chain
//! - Links point strictly downward, so chains are acyclic

use std::sync::Arc;

/// Shared link to a frame, `None` being the sentinel
pub type Link<T> = Option<Arc<Frame<T>>>;

/// The bottom of every chain. A head equal to this link marks an empty chain.
pub const fn sentinel<T>() -> Link<T> {
    None
}

/// A single immutable stack frame
#[derive(Debug)]
pub struct Frame<T> {
    subframe: Link<T>,
    value: T,
}

impl<T> Frame<T> {
    /// Create a frame on top of `subframe`, returning the new head link
    pub fn link(subframe: Link<T>, value: T) -> Link<T> {
        Some(Arc::new(Self { subframe, value }))
    }

    /// Value stored in this frame
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Frame immediately below this one
    pub fn subframe(&self) -> Option<&Frame<T>> {
        self.subframe.as_deref()
    }

    /// Discard the top frame of a chain, returning the rest of the chain
    pub fn into_subframe(frame: Arc<Frame<T>>) -> Link<T> {
        match Arc::try_unwrap(frame) {
            Ok(frame) => frame.subframe,
            Err(shared) => shared.subframe.clone(),
        }
    }
}

impl<T: Clone> Frame<T> {
    /// Detach the top frame of a chain into its value and the rest of the chain.
    ///
    /// A uniquely owned frame gives up its value; a frame still shared with
    /// another head is left intact and its value is cloned.
    pub fn split(frame: Arc<Frame<T>>) -> (T, Link<T>) {
        match Arc::try_unwrap(frame) {
            Ok(frame) => (frame.value, frame.subframe),
            Err(shared) => (shared.value.clone(), shared.subframe.clone()),
        }
    }
}

/// Release a chain one frame at a time.
///
/// Dropping a deep chain through `Arc`'s own destructor recurses once per
/// frame. Walking it here stops at the first frame another head still holds.
pub fn unlink<T>(mut link: Link<T>) {
    while let Some(frame) = link {
        match Arc::try_unwrap(frame) {
            Ok(frame) => link = frame.subframe,
            Err(_) => break,
        }
    }
}

/// A value offered to a stack.
///
/// `Entry::Sentinel` stands for the shared bottom marker and is always
/// rejected by [`MinStack::push_entry`](crate::MinStack::push_entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<T> {
    Sentinel,
    Value(T),
}

impl<T> From<T> for Entry<T> {
    fn from(value: T) -> Self {
        Entry::Value(value)
    }
}

/// Top-to-bottom iterator over the values of a chain
#[derive(Debug)]
pub struct Iter<'a, T> {
    current: Option<&'a Frame<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: &'a Link<T>) -> Self {
        Self {
            current: head.as_deref(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let frame = self.current?;
        self.current = frame.subframe();
        Some(frame.value())
    }
}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}
