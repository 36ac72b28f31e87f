//! The material record edited in the examples.

use crate::Originator;
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable capture of the fields of a [`Material`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialState {
    name: String,
    density: f64,
    color: String,
    transparent: bool,
}

impl MaterialState {
    /// Returns a new material state.
    pub fn new(
        name: impl Into<String>,
        density: f64,
        color: impl Into<String>,
        transparent: bool,
    ) -> MaterialState {
        MaterialState {
            name: name.into(),
            density,
            color: color.into(),
            transparent,
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the density.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Returns the color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns `true` if the material is transparent.
    pub fn is_transparent(&self) -> bool {
        self.transparent
    }
}

impl Display for MaterialState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Material: {}, Density: {}, Color: {}, Transparent: {}",
            self.name, self.density, self.color, self.transparent
        )
    }
}

/// A material with a name, density, color and transparency.
///
/// The setters only store the new value. Taking snapshots is left to
/// the owner of the material, see [`Editor`](crate::Editor).
///
/// # Examples
/// ```
/// # use memento::{Material, Originator};
/// let mut glass = Material::new("Glass", 2.5, "Clear", true);
/// let before = glass.snapshot();
/// glass.set_name("Tempered Glass");
/// assert_eq!(before.name(), "Glass");
/// glass.restore(&before);
/// assert_eq!(glass.to_string(), "Material: Glass, Density: 2.5, Color: Clear, Transparent: true");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    state: MaterialState,
}

impl Material {
    /// Returns a new material.
    pub fn new(
        name: impl Into<String>,
        density: f64,
        color: impl Into<String>,
        transparent: bool,
    ) -> Material {
        Material {
            state: MaterialState::new(name, density, color, transparent),
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// Sets the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.name = name.into();
    }

    /// Returns the density.
    pub fn density(&self) -> f64 {
        self.state.density()
    }

    /// Sets the density.
    pub fn set_density(&mut self, density: f64) {
        self.state.density = density;
    }

    /// Returns the color.
    pub fn color(&self) -> &str {
        self.state.color()
    }

    /// Sets the color.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.state.color = color.into();
    }

    /// Returns `true` if the material is transparent.
    pub fn is_transparent(&self) -> bool {
        self.state.is_transparent()
    }

    /// Sets the transparency.
    pub fn set_transparent(&mut self, transparent: bool) {
        self.state.transparent = transparent;
    }
}

impl From<MaterialState> for Material {
    fn from(state: MaterialState) -> Self {
        Material { state }
    }
}

impl Originator for Material {
    type Snapshot = MaterialState;

    fn snapshot(&self) -> MaterialState {
        self.state.clone()
    }

    fn restore(&mut self, snapshot: &MaterialState) {
        self.state.clone_from(snapshot);
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.state, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_detached() {
        let mut material = Material::new("Glass", 2.5, "Clear", true);
        let snapshot = material.snapshot();
        material.set_name("Steel");
        material.set_density(7.8);
        material.set_color("Grey");
        material.set_transparent(false);
        assert_eq!(snapshot, MaterialState::new("Glass", 2.5, "Clear", true));
    }

    #[test]
    fn restore_overwrites_every_field() {
        let mut material = Material::new("Steel", 7.8, "Grey", false);
        material.restore(&MaterialState::new("Glass", 2.5, "Clear", true));
        assert_eq!(material.name(), "Glass");
        assert_eq!(material.density(), 2.5);
        assert_eq!(material.color(), "Clear");
        assert!(material.is_transparent());
    }
}
