//! Ride fares composed from a tree of components.
//!
//! A fare is built from leaves, [`SingleRide`]s and [`Surcharge`]s, grouped
//! under [`CompositeRide`]s. Every node implements [`RideComponent`], so a
//! single ride, a ride with surcharges and a whole package of rides are
//! priced and described the same way.
//!
//! [`FareCalculator`] is the flat alternative: one function with a flag per
//! surcharge. It is kept for comparison with the tree.
//!
//! # Examples
//! ```
//! # use memento::fare::{CompositeRide, RideComponent, RideType, SingleRide, Surcharge};
//! let mut surge = CompositeRide::new("Standard Ride with Surge");
//! surge.add(SingleRide::new(RideType::UberX, 10.0, 2.5, 1.5));
//! surge.add(Surcharge::new("Peak Hours", 3.5));
//!
//! let mut corporate = CompositeRide::new("Corporate Package");
//! corporate.add(surge);
//! corporate.add(Surcharge::new("Corporate Discount", -15.0));
//!
//! assert_eq!(corporate.compute_fare(), 6.0);
//! assert_eq!(
//!     corporate.describe(),
//!     "Corporate Package [Standard Ride with Surge [UberX - 10km + Peak Hours ($3.50)] + Corporate Discount ($-15.00)]"
//! );
//! ```

mod calculator;
mod composite;
mod ride;

pub use calculator::{
    Conditions, CorporatePackageCalculator, FareCalculator, AIRPORT_FEE, CORPORATE_DISCOUNT,
    PEAK_HOURS_SURCHARGE,
};
pub use composite::CompositeRide;
pub use ride::{SingleRide, Surcharge};

use crate::Error;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Functionality shared by every node in a fare tree.
pub trait RideComponent {
    /// Returns the fare of the component, without rounding.
    fn compute_fare(&self) -> f64;

    /// Returns a human readable description of the component.
    fn describe(&self) -> String;
}

impl<C: RideComponent + ?Sized> RideComponent for Box<C> {
    fn compute_fare(&self) -> f64 {
        (**self).compute_fare()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The known ride categories.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum RideType {
    /// The standard ride.
    UberX,
    /// The premium ride.
    UberBlack,
}

impl RideType {
    /// Returns the fixed part of the standard fare.
    pub fn base_fare(self) -> f64 {
        match self {
            RideType::UberX => 2.5,
            RideType::UberBlack => 5.0,
        }
    }

    /// Returns the standard price per km.
    pub fn price_per_km(self) -> f64 {
        match self {
            RideType::UberX => 1.5,
            RideType::UberBlack => 2.5,
        }
    }

    /// Returns the standard fare for a ride of `distance` km.
    pub fn fare(self, distance: f64) -> f64 {
        self.base_fare() + distance * self.price_per_km()
    }
}

impl Display for RideType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            RideType::UberX => "UberX",
            RideType::UberBlack => "UberBlack",
        })
    }
}

impl FromStr for RideType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UberX" => Ok(RideType::UberX),
            "UberBlack" => Ok(RideType::UberBlack),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// A node in a fare tree.
///
/// Children of a [`CompositeRide`] are stored as `Ride`s, which lets a
/// branch hold leaves and other branches side by side and compare them
/// structurally.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Ride {
    /// A single ride leaf.
    Single(SingleRide),
    /// A surcharge or discount leaf.
    Surcharge(Surcharge),
    /// A branch of other rides.
    Composite(CompositeRide),
}

impl RideComponent for Ride {
    fn compute_fare(&self) -> f64 {
        match self {
            Ride::Single(ride) => ride.compute_fare(),
            Ride::Surcharge(surcharge) => surcharge.compute_fare(),
            Ride::Composite(composite) => composite.compute_fare(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Ride::Single(ride) => ride.describe(),
            Ride::Surcharge(surcharge) => surcharge.describe(),
            Ride::Composite(composite) => composite.describe(),
        }
    }
}

impl From<SingleRide> for Ride {
    fn from(ride: SingleRide) -> Self {
        Ride::Single(ride)
    }
}

impl From<Surcharge> for Ride {
    fn from(surcharge: Surcharge) -> Self {
        Ride::Surcharge(surcharge)
    }
}

impl From<CompositeRide> for Ride {
    fn from(composite: CompositeRide) -> Self {
        Ride::Composite(composite)
    }
}
