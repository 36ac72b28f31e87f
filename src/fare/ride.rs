use super::{RideComponent, RideType};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single ride priced by a base fare and a price per km.
///
/// # Examples
/// ```
/// # use memento::fare::{RideComponent, RideType, SingleRide};
/// let ride = SingleRide::new(RideType::UberBlack, 10.0, 5.0, 2.5);
/// assert_eq!(ride.compute_fare(), 30.0);
/// assert_eq!(ride.describe(), "UberBlack - 10km");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SingleRide {
    ride_type: RideType,
    distance: f64,
    base_fare: f64,
    price_per_km: f64,
}

impl SingleRide {
    /// Returns a new ride.
    pub fn new(ride_type: RideType, distance: f64, base_fare: f64, price_per_km: f64) -> SingleRide {
        SingleRide {
            ride_type,
            distance,
            base_fare,
            price_per_km,
        }
    }

    /// Returns a new ride priced with the standard rates of `ride_type`.
    pub fn standard(ride_type: RideType, distance: f64) -> SingleRide {
        SingleRide::new(
            ride_type,
            distance,
            ride_type.base_fare(),
            ride_type.price_per_km(),
        )
    }

    /// Returns the ride type.
    pub fn ride_type(&self) -> RideType {
        self.ride_type
    }

    /// Returns the distance in km.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the base fare.
    pub fn base_fare(&self) -> f64 {
        self.base_fare
    }

    /// Returns the price per km.
    pub fn price_per_km(&self) -> f64 {
        self.price_per_km
    }
}

impl RideComponent for SingleRide {
    fn compute_fare(&self) -> f64 {
        self.base_fare + self.distance * self.price_per_km
    }

    fn describe(&self) -> String {
        format!("{} - {}km", self.ride_type, self.distance)
    }
}

/// A fixed amount added to a fare.
///
/// A negative amount is a discount.
///
/// # Examples
/// ```
/// # use memento::fare::{RideComponent, Surcharge};
/// let discount = Surcharge::new("Corporate Discount", -15.0);
/// assert_eq!(discount.compute_fare(), -15.0);
/// assert_eq!(discount.describe(), "Corporate Discount ($-15.00)");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Surcharge {
    reason: String,
    amount: f64,
}

impl Surcharge {
    /// Returns a new surcharge.
    pub fn new(reason: impl Into<String>, amount: f64) -> Surcharge {
        Surcharge {
            reason: reason.into(),
            amount,
        }
    }

    /// Returns the reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl RideComponent for Surcharge {
    fn compute_fare(&self) -> f64 {
        self.amount
    }

    fn describe(&self) -> String {
        format!("{} (${:.2})", self.reason, self.amount)
    }
}
