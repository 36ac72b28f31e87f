//! A bounded stack of snapshots.

use arrayvec::ArrayVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An undo-only stack that keeps at most `N` snapshots.
///
/// The stack is the simplest caretaker: snapshots are pushed on top and
/// popped off when undoing. When the stack is full the oldest snapshot is
/// dropped to make room. There is no cursor, so a popped snapshot can not
/// be redone.
///
/// # Examples
/// ```
/// # use memento::BoundedUndoStack;
/// let mut stack: BoundedUndoStack<char, 2> = BoundedUndoStack::new();
/// stack.push('a');
/// stack.push('b');
/// stack.push('c');
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.undo(), Some('c'));
/// assert_eq!(stack.undo(), Some('b'));
/// assert_eq!(stack.undo(), None);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct BoundedUndoStack<T, const N: usize = 10> {
    entries: ArrayVec<T, N>,
}

impl<T, const N: usize> BoundedUndoStack<T, N> {
    /// Returns a new stack.
    pub fn new() -> BoundedUndoStack<T, N> {
        BoundedUndoStack {
            entries: ArrayVec::new(),
        }
    }

    /// Returns the number of snapshots the stack can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of snapshots in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the stack can undo.
    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }

    /// Returns an iterator over the snapshots, oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Pushes the snapshot on top of the stack, dropping the oldest one if the stack is full.
    pub fn push(&mut self, snapshot: T) {
        if self.entries.is_full() {
            // A zero capacity stack has nothing to drop and keeps nothing.
            if self.entries.pop_at(0).is_none() {
                return;
            }
            debug!(capacity = N, "dropped oldest snapshot");
        }
        self.entries.push(snapshot);
    }

    /// Pops the newest snapshot off the stack.
    pub fn undo(&mut self) -> Option<T> {
        let snapshot = self.entries.pop();
        debug!(len = self.len(), undone = snapshot.is_some(), "undo");
        snapshot
    }

    /// Removes all snapshots from the stack.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T, const N: usize> Default for BoundedUndoStack<T, N> {
    fn default() -> Self {
        BoundedUndoStack::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut stack: BoundedUndoStack<u32> = BoundedUndoStack::new();
        for i in 0..12 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 10);
        assert_eq!(stack.snapshots().next(), Some(&2));
        assert_eq!(stack.undo(), Some(11));
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut stack: BoundedUndoStack<u32, 0> = BoundedUndoStack::new();
        stack.push(1);
        assert!(stack.is_empty());
        assert!(!stack.can_undo());
        assert_eq!(stack.undo(), None);
    }
}
