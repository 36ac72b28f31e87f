//! A linear history of snapshots.

mod builder;
mod display;

pub use builder::Builder;
pub use display::Display;

use crate::socket::{Signal, Slot, Socket};
use crate::Entry;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use core::num::NonZeroUsize;
#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// A linear history of snapshots with a cursor.
///
/// The history is the caretaker of the snapshots taken from an originator.
/// It never inspects or changes the snapshots, it only moves a cursor
/// between them. Pushing a snapshot while the cursor is not at the newest
/// one discards every snapshot after the cursor, so the undone states can
/// no longer be redone.
///
/// # Examples
/// ```
/// # use memento::History;
/// let mut history = History::new();
/// history.push("a");
/// history.push("b");
/// history.push("c");
/// assert_eq!(history.undo(), Some(&"b"));
/// assert_eq!(history.undo(), Some(&"a"));
/// assert_eq!(history.undo(), None);
/// assert_eq!(history.redo(), Some(&"b"));
///
/// history.push("d");
/// assert!(!history.can_redo());
/// assert_eq!(history.snapshots().collect::<Vec<_>>(), [&"a", &"b", &"d"]);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug)]
pub struct History<T, S = ()> {
    entries: VecDeque<Entry<T>>,
    /// Number of entries up to and including the cursor.
    index: usize,
    limit: NonZeroUsize,
    socket: Socket<S>,
}

impl<T> History<T> {
    /// Returns a new history.
    pub fn new() -> History<T> {
        History::builder().build()
    }

    /// Returns a new history builder.
    pub fn builder() -> Builder<T> {
        Builder::default()
    }
}

impl<T, S> History<T, S> {
    /// Reserves capacity for at least `additional` more snapshots.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Returns the capacity of the history.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Shrinks the capacity of the history as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Returns the number of snapshots in the history.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the limit of the history.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns `true` if there is an older snapshot to step back to.
    pub fn can_undo(&self) -> bool {
        self.index > 1
    }

    /// Returns `true` if there is a newer snapshot to step forward to.
    pub fn can_redo(&self) -> bool {
        self.index < self.len()
    }

    /// Returns the position of the active snapshot, or `None` if the history is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Returns the active snapshot.
    pub fn current(&self) -> Option<&T> {
        self.cursor().and_then(|i| self.entries.get(i)).map(Entry::get)
    }

    /// Returns an iterator over the entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    /// Returns an iterator over the snapshots, oldest first.
    pub fn snapshots(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(Entry::get)
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<'_, T, S> {
        Display::from(self)
    }
}

impl<T, S: Slot> History<T, S> {
    /// Pushes the snapshot on top of the history and makes it the active one.
    ///
    /// Every snapshot after the cursor is discarded first. If the limit
    /// is reached the oldest snapshot is dropped.
    pub fn push(&mut self, snapshot: T) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        let discarded = self.len() - self.index;
        if discarded > 0 {
            self.entries.truncate(self.index);
            debug!(discarded, "discarded redo snapshots");
        }
        if self.limit() == self.index {
            self.entries.pop_front();
            debug!(limit = self.limit(), "dropped oldest snapshot");
        } else {
            self.index += 1;
        }
        self.entries.push_back(Entry::from(snapshot));
        let can_undo = self.can_undo();
        let cursor = self.index - 1;
        debug!(cursor, len = self.len(), "pushed snapshot");
        self.socket.emit_if(could_redo, || Signal::Redo(false));
        self.socket
            .emit_if(could_undo != can_undo, || Signal::Undo(can_undo));
        self.socket.emit(|| Signal::Cursor(cursor));
    }

    /// Moves the cursor one step back and returns the snapshot that is now active.
    ///
    /// Returns `None` and leaves the history unchanged if there is nothing to undo.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            debug!("nothing to undo");
            return None;
        }
        let could_redo = self.can_redo();
        self.index -= 1;
        let cursor = self.index - 1;
        let can_undo = self.can_undo();
        debug!(cursor, "undo");
        self.socket.emit_if(!can_undo, || Signal::Undo(false));
        self.socket.emit_if(!could_redo, || Signal::Redo(true));
        self.socket.emit(|| Signal::Cursor(cursor));
        self.current()
    }

    /// Moves the cursor one step forward and returns the snapshot that is now active.
    ///
    /// Returns `None` and leaves the history unchanged if there is nothing to redo.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            debug!("nothing to redo");
            return None;
        }
        let could_undo = self.can_undo();
        self.index += 1;
        let cursor = self.index - 1;
        let can_undo = self.can_undo();
        let can_redo = self.can_redo();
        debug!(cursor, "redo");
        self.socket.emit_if(!could_undo && can_undo, || Signal::Undo(true));
        self.socket.emit_if(!can_redo, || Signal::Redo(false));
        self.socket.emit(|| Signal::Cursor(cursor));
        self.current()
    }

    /// Moves the cursor to `cursor` and returns the snapshot that is now active.
    ///
    /// Returns `None` and leaves the history unchanged if `cursor` is out of range.
    pub fn go_to(&mut self, cursor: usize) -> Option<&T> {
        if cursor >= self.len() {
            return None;
        }
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        let moved = self.cursor() != Some(cursor);
        self.index = cursor + 1;
        let can_undo = self.can_undo();
        let can_redo = self.can_redo();
        debug!(cursor, "go to");
        self.socket
            .emit_if(could_undo != can_undo, || Signal::Undo(can_undo));
        self.socket
            .emit_if(could_redo != can_redo, || Signal::Redo(can_redo));
        self.socket.emit_if(moved, || Signal::Cursor(cursor));
        self.current()
    }

    /// Go back or forward in the history to the newest snapshot taken at or before `to`.
    ///
    /// Returns `None` if every snapshot was taken after `to`.
    #[cfg(feature = "chrono")]
    pub fn time_travel(&mut self, to: &DateTime<Utc>) -> Option<&T> {
        let taken = self.entries.partition_point(|e| e.timestamp() <= *to);
        self.go_to(taken.checked_sub(1)?)
    }

    /// Removes all snapshots from the history.
    pub fn clear(&mut self) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        self.entries.clear();
        self.index = 0;
        debug!("cleared history");
        self.socket.emit_if(could_undo, || Signal::Undo(false));
        self.socket.emit_if(could_redo, || Signal::Redo(false));
    }
}

/// The serialized form of a [`History`], checked before it is accepted.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawHistory<T, S> {
    entries: VecDeque<Entry<T>>,
    index: usize,
    limit: NonZeroUsize,
    socket: Socket<S>,
}

#[cfg(feature = "serde")]
impl<'de, T, S> Deserialize<'de> for History<T, S>
where
    T: Deserialize<'de>,
    S: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawHistory::<T, S>::deserialize(deserializer)?;
        let len = raw.entries.len();
        if raw.index > len {
            return Err(de::Error::custom(format_args!(
                "cursor index {} is out of range for {len} snapshots",
                raw.index
            )));
        }
        if raw.index == 0 && len > 0 {
            return Err(de::Error::custom("history has snapshots but no cursor"));
        }
        if len > raw.limit.get() {
            return Err(de::Error::custom(format_args!(
                "{len} snapshots exceed the limit of {}",
                raw.limit
            )));
        }
        Ok(History {
            entries: raw.entries,
            index: raw.index,
            limit: raw.limit,
            socket: raw.socket,
        })
    }
}

impl<T> Default for History<T> {
    fn default() -> History<T> {
        History::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_push() {
        let mut history = History::new();
        assert_eq!(history.cursor(), None);
        assert_eq!(history.current(), None);
        history.push(1);
        assert_eq!(history.cursor(), Some(0));
        history.push(2);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.current(), Some(&2));
    }

    #[test]
    fn limit_drops_oldest() {
        let mut history = History::builder().limit(3).build();
        for i in 0..5 {
            history.push(i);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.snapshots().copied().collect::<Vec<_>>(), [2, 3, 4]);
        assert_eq!(history.undo(), Some(&3));
        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn limit_of_one_never_undoes() {
        let mut history = History::builder().limit(1).build();
        history.push('a');
        history.push('b');
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current(), Some(&'b'));
    }

    #[test]
    fn go_to_out_of_range() {
        let mut history = History::new();
        history.push('a');
        history.push('b');
        assert_eq!(history.go_to(2), None);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.go_to(0), Some(&'a'));
        assert!(history.can_redo());
    }

    #[test]
    fn clear_resets_cursor() {
        let mut history = History::new();
        history.push('a');
        history.push('b');
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }
}
