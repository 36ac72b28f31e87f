//! **Snapshot based undo-redo and composite ride fares.**
//!
//! The crate has two independent parts.
//!
//! The first is an implementation of the memento pattern. An [`Originator`]
//! captures its state in snapshots, and a caretaker keeps the snapshots so
//! the originator can be moved back and forth between them:
//!
//! * [`History`] provides linear undo-redo functionality with a cursor.
//!   Pushing a new snapshot after undoing discards the undone snapshots.
//! * [`BoundedUndoStack`] provides undo-only functionality and keeps a
//!   fixed number of the most recent snapshots.
//! * [`Editor`] and [`BoundedEditor`] pair an originator with one of the
//!   caretakers and take the snapshots for you.
//! * [`Material`] is an originator with four fields.
//!
//! The second is an implementation of the composite pattern, found in the
//! [`fare`] module, where the fare of a ride is computed from a tree of
//! rides, surcharges and groups of those.
//!
//! # Cargo Feature Flags
//!
//! | Name    | Description                                          |
//! |---------|------------------------------------------------------|
//! | chrono  | Enables time stamps and time travel.                 |
//! | colored | Enables colored output when visualizing the history. |
//! | serde   | Enables serialization and deserialization.           |
//!
//! No feature is enabled by default.
//!
//! # Examples
//! ```
//! use memento::{Editor, Material};
//!
//! let mut editor = Editor::new(Material::new("Glass", 2.5, "Clear", true));
//! editor.update_name("Tempered Glass");
//! editor.update_density(2.8);
//! editor.update_color("Slight blue tint");
//!
//! assert!(editor.undo());
//! assert_eq!(editor.target().color(), "Clear");
//! assert!(editor.undo());
//! assert_eq!(editor.target().density(), 2.5);
//! assert!(editor.redo());
//! assert_eq!(editor.target().density(), 2.8);
//!
//! editor.update_transparency(false);
//! assert!(!editor.redo());
//! ```

#![doc(html_root_url = "https://docs.rs/memento")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod editor;
mod entry;
pub mod fare;
mod format;
pub mod history;
mod material;
mod originator;
mod socket;
mod stack;

use format::Format;
use thiserror::Error;

pub use editor::{BoundedEditor, Editor};
pub use entry::Entry;
pub use history::History;
pub use material::{Material, MaterialState};
pub use originator::Originator;
pub use socket::{Signal, Slot};
pub use stack::BoundedUndoStack;

/// The errors that can occur in this crate.
///
/// Undoing or redoing past either end of a history is not an error, it is
/// reported through [`Option`] and [`bool`] return values instead.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// The ride type is not one of the known ride types.
    #[error("unknown ride type `{0}`")]
    UnknownCategory(String),
}

/// A specialized Result type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
