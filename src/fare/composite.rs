use super::{Ride, RideComponent};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named group of rides that is priced as the sum of its children.
///
/// The children are owned by the group and kept in insertion order.
///
/// # Examples
/// ```
/// # use memento::fare::{CompositeRide, Ride, RideComponent, Surcharge};
/// let mut package = CompositeRide::new("Package");
/// assert_eq!(package.describe(), "Package");
/// assert_eq!(package.compute_fare(), 0.0);
///
/// package.add(Surcharge::new("Airport Fee", 5.0));
/// assert_eq!(package.describe(), "Package [Airport Fee ($5.00)]");
///
/// let removed = package.remove(&Ride::from(Surcharge::new("Airport Fee", 5.0)));
/// assert!(removed.is_some());
/// assert!(package.is_empty());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeRide {
    name: String,
    children: Vec<Ride>,
}

impl CompositeRide {
    /// Returns a new empty group.
    pub fn new(name: impl Into<String>) -> CompositeRide {
        CompositeRide {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> &[Ride] {
        &self.children
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends `child` to the group.
    ///
    /// Duplicates are not detected.
    pub fn add(&mut self, child: impl Into<Ride>) {
        self.children.push(child.into());
    }

    /// Removes and returns the first child equal to `child`.
    ///
    /// Returns `None` if there is no such child.
    pub fn remove(&mut self, child: &Ride) -> Option<Ride> {
        let index = self.children.iter().position(|c| c == child)?;
        Some(self.children.remove(index))
    }
}

impl RideComponent for CompositeRide {
    fn compute_fare(&self) -> f64 {
        self.children.iter().map(RideComponent::compute_fare).sum()
    }

    fn describe(&self) -> String {
        if self.children.is_empty() {
            return self.name.clone();
        }
        let descriptions = self
            .children
            .iter()
            .map(RideComponent::describe)
            .collect::<Vec<_>>();
        format!("{} [{}]", self.name, descriptions.join(" + "))
    }
}

impl<R: Into<Ride>> Extend<R> for CompositeRide {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        self.children.extend(iter.into_iter().map(Into::into));
    }
}
