//! Module used to communicate changes in the history.

use core::mem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{Sender, SyncSender};

/// Slot wrapper that adds some additional functionality.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub(crate) struct Socket<S>(Option<S>);

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket(Some(slot))
    }

    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.0, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket(None)
    }
}

impl<S: Slot> Socket<S> {
    pub fn emit(&mut self, signal: impl FnOnce() -> Signal) {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(signal());
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: impl FnOnce() -> Signal) {
        if cond {
            self.emit(signal);
        }
    }
}

/// The `Signal` describes the state change done to the history.
///
/// See [`Slot`] for more information.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// Emitted when the ability to undo has changed.
    Undo(bool),
    /// Emitted when the ability to redo has changed.
    Redo(bool),
    /// Emitted when the cursor has moved.
    Cursor(usize),
}

/// Use this to handle signals emitted.
///
/// This allows you to trigger events on certain state changes.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use memento::{History, Signal};
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let mut history = History::builder().connect(sender).build();
///
/// history.push("a");
/// assert_eq!(iter.next(), Some(Signal::Cursor(0)));
/// assert_eq!(iter.next(), None);
///
/// history.push("b");
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), Some(Signal::Cursor(1)));
/// assert_eq!(iter.next(), None);
///
/// history.undo();
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Redo(true)));
/// assert_eq!(iter.next(), Some(Signal::Cursor(0)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Receives a signal that describes the state change done to the history.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
