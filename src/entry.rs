#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wrapper around a snapshot that contains additional metadata.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<T> {
    snapshot: T,
    #[cfg(feature = "chrono")]
    timestamp: DateTime<Utc>,
}

impl<T> Entry<T> {
    /// Returns the snapshot.
    pub fn get(&self) -> &T {
        &self.snapshot
    }

    /// Returns the time the snapshot was taken.
    #[cfg(feature = "chrono")]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl<T> From<T> for Entry<T> {
    fn from(snapshot: T) -> Self {
        Entry {
            snapshot,
            #[cfg(feature = "chrono")]
            timestamp: Utc::now(),
        }
    }
}

impl<T: Display> Display for Entry<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        (&self.snapshot as &dyn Display).fmt(f)
    }
}
