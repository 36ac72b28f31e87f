/// An object whose state can be captured in a snapshot and restored from it.
///
/// A snapshot must own its data. Changing the originator after a snapshot
/// has been taken must never change the snapshot.
///
/// # Examples
/// ```
/// # use memento::Originator;
/// struct Counter(u32);
///
/// impl Originator for Counter {
///     type Snapshot = u32;
///
///     fn snapshot(&self) -> u32 {
///         self.0
///     }
///
///     fn restore(&mut self, snapshot: &u32) {
///         self.0 = *snapshot;
///     }
/// }
///
/// let mut counter = Counter(1);
/// let one = counter.snapshot();
/// counter.0 += 1;
/// counter.restore(&one);
/// assert_eq!(counter.0, 1);
/// ```
pub trait Originator {
    /// The type of the captured state.
    type Snapshot;

    /// Captures the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Overwrites the current state with the captured one.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}
