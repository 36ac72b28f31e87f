//! Editors that pair an originator with a caretaker.

use crate::socket::Slot;
use crate::{BoundedUndoStack, History, Material, Originator};
use core::fmt;
use tracing::info;

/// An originator together with a [`History`] of its snapshots.
///
/// A snapshot is pushed after every edit, so the active snapshot of the
/// history always matches the current state of the target.
///
/// # Examples
/// ```
/// # use memento::{Editor, Material};
/// let mut editor = Editor::new(Material::new("Glass", 2.5, "Clear", true));
/// editor.update_name("Tempered Glass");
/// editor.update_density(2.8);
///
/// assert!(editor.undo());
/// assert_eq!(editor.target().density(), 2.5);
/// assert!(editor.redo());
/// assert_eq!(editor.target().density(), 2.8);
/// assert!(!editor.redo());
/// ```
pub struct Editor<O: Originator, S = ()> {
    target: O,
    history: History<O::Snapshot, S>,
}

impl<O: Originator> Editor<O> {
    /// Returns a new editor with the initial state of `target` saved.
    pub fn new(target: O) -> Editor<O> {
        Editor::with_history(target, History::new())
    }
}

impl<O: Originator, S> Editor<O, S> {
    /// Returns a reference to the target.
    pub fn target(&self) -> &O {
        &self.target
    }

    /// Returns a reference to the history.
    pub fn history(&self) -> &History<O::Snapshot, S> {
        &self.history
    }

    /// Returns `true` if the editor can undo.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if the editor can redo.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Consumes the editor, returning the target.
    pub fn into_target(self) -> O {
        self.target
    }
}

impl<O: Originator, S: Slot> Editor<O, S> {
    /// Returns a new editor that saves the snapshots of `target` in `history`.
    ///
    /// The current state of `target` is pushed onto the history.
    pub fn with_history(target: O, mut history: History<O::Snapshot, S>) -> Editor<O, S> {
        history.push(target.snapshot());
        Editor { target, history }
    }

    /// Applies `f` to the target and saves the resulting state.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut O) -> R) -> R {
        let output = f(&mut self.target);
        self.history.push(self.target.snapshot());
        output
    }

    /// Restores the target to the previous snapshot.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.target.restore(snapshot);
                info!("undo successful");
                true
            }
            None => {
                info!("nothing to undo");
                false
            }
        }
    }

    /// Restores the target to the next snapshot.
    ///
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.target.restore(snapshot);
                info!("redo successful");
                true
            }
            None => {
                info!("nothing to redo");
                false
            }
        }
    }
}

impl<O, S> Clone for Editor<O, S>
where
    O: Originator + Clone,
    O::Snapshot: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Editor {
            target: self.target.clone(),
            history: self.history.clone(),
        }
    }
}

impl<O, S> fmt::Debug for Editor<O, S>
where
    O: Originator + fmt::Debug,
    O::Snapshot: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Editor")
            .field("target", &self.target)
            .field("history", &self.history)
            .finish()
    }
}

impl<S: Slot> Editor<Material, S> {
    /// Sets the name of the material.
    pub fn update_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        info!(%name, "updated name");
        self.edit(|material| material.set_name(name));
    }

    /// Sets the density of the material.
    pub fn update_density(&mut self, density: f64) {
        info!(density, "updated density");
        self.edit(|material| material.set_density(density));
    }

    /// Sets the color of the material.
    pub fn update_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        info!(%color, "updated color");
        self.edit(|material| material.set_color(color));
    }

    /// Sets the transparency of the material.
    pub fn update_transparency(&mut self, transparent: bool) {
        info!(transparent, "updated transparency");
        self.edit(|material| material.set_transparent(transparent));
    }
}

/// An originator together with a [`BoundedUndoStack`] of its snapshots.
///
/// A snapshot of the old state is pushed before every edit, and undoing
/// pops it back into the target. Only the `N` most recent edits can be
/// undone and nothing can be redone.
///
/// # Examples
/// ```
/// # use memento::{BoundedEditor, Material};
/// let mut editor: BoundedEditor<Material> =
///     BoundedEditor::new(Material::new("Glass", 2.5, "Clear", true));
/// editor.update_color("Slight blue tint");
/// assert!(editor.undo());
/// assert_eq!(editor.target().color(), "Clear");
/// assert!(!editor.undo());
/// ```
pub struct BoundedEditor<O: Originator, const N: usize = 10> {
    target: O,
    stack: BoundedUndoStack<O::Snapshot, N>,
}

impl<O: Originator, const N: usize> BoundedEditor<O, N> {
    /// Returns a new editor with an empty stack.
    pub fn new(target: O) -> BoundedEditor<O, N> {
        BoundedEditor {
            target,
            stack: BoundedUndoStack::new(),
        }
    }

    /// Returns a reference to the target.
    pub fn target(&self) -> &O {
        &self.target
    }

    /// Returns a reference to the stack.
    pub fn stack(&self) -> &BoundedUndoStack<O::Snapshot, N> {
        &self.stack
    }

    /// Returns `true` if the editor can undo.
    pub fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    /// Consumes the editor, returning the target.
    pub fn into_target(self) -> O {
        self.target
    }

    /// Saves the current state and applies `f` to the target.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut O) -> R) -> R {
        self.stack.push(self.target.snapshot());
        f(&mut self.target)
    }

    /// Restores the state saved before the last edit.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.stack.undo() {
            Some(snapshot) => {
                self.target.restore(&snapshot);
                info!("last change undone");
                true
            }
            None => {
                info!("nothing to undo");
                false
            }
        }
    }
}

impl<O, const N: usize> Clone for BoundedEditor<O, N>
where
    O: Originator + Clone,
    O::Snapshot: Clone,
{
    fn clone(&self) -> Self {
        BoundedEditor {
            target: self.target.clone(),
            stack: self.stack.clone(),
        }
    }
}

impl<O, const N: usize> fmt::Debug for BoundedEditor<O, N>
where
    O: Originator + fmt::Debug,
    O::Snapshot: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BoundedEditor")
            .field("target", &self.target)
            .field("stack", &self.stack)
            .finish()
    }
}

impl<const N: usize> BoundedEditor<Material, N> {
    /// Sets the name of the material.
    pub fn update_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        info!(%name, "updated name");
        self.edit(|material| material.set_name(name));
    }

    /// Sets the density of the material.
    pub fn update_density(&mut self, density: f64) {
        info!(density, "updated density");
        self.edit(|material| material.set_density(density));
    }

    /// Sets the color of the material.
    pub fn update_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        info!(%color, "updated color");
        self.edit(|material| material.set_color(color));
    }

    /// Sets the transparency of the material.
    pub fn update_transparency(&mut self, transparent: bool) {
        info!(transparent, "updated transparency");
        self.edit(|material| material.set_transparent(transparent));
    }
}
