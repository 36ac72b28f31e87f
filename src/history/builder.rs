use crate::socket::Socket;
use crate::History;
use core::marker::PhantomData;
use core::num::NonZeroUsize;
use std::collections::VecDeque;

/// Builder for a [`History`].
///
/// # Examples
/// ```
/// # use memento::History;
/// let mut history = History::builder()
///     .limit(100)
///     .capacity(100)
///     .connect(|s| { dbg!(s); })
///     .build();
/// # history.push("a");
/// ```
#[derive(Debug)]
pub struct Builder<T, S = ()> {
    capacity: usize,
    limit: NonZeroUsize,
    socket: Socket<S>,
    pd: PhantomData<T>,
}

impl<T, S> Builder<T, S> {
    /// Sets the capacity for the history.
    pub fn capacity(mut self, capacity: usize) -> Builder<T, S> {
        self.capacity = capacity;
        self
    }

    /// Sets the `limit` of the history.
    ///
    /// Only the `limit` most recent snapshots are kept.
    ///
    /// # Panics
    /// Panics if `limit` is `0`.
    pub fn limit(mut self, limit: usize) -> Builder<T, S> {
        self.limit = NonZeroUsize::new(limit).expect("limit can not be `0`");
        self
    }

    /// Connects the slot.
    pub fn connect<F>(self, slot: F) -> Builder<T, F> {
        Builder {
            capacity: self.capacity,
            limit: self.limit,
            socket: Socket::new(slot),
            pd: PhantomData,
        }
    }

    /// Builds the history.
    pub fn build(self) -> History<T, S> {
        History {
            entries: VecDeque::with_capacity(self.capacity),
            index: 0,
            limit: self.limit,
            socket: self.socket,
        }
    }
}

impl<T, S> Default for Builder<T, S> {
    fn default() -> Self {
        Builder {
            capacity: 0,
            limit: NonZeroUsize::MAX,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}
