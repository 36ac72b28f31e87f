use super::RideType;
use crate::Result;
use tracing::debug;

/// Added to the fare of a ride during peak hours.
pub const PEAK_HOURS_SURCHARGE: f64 = 3.5;
/// Added to the fare of a ride picked up at the airport.
pub const AIRPORT_FEE: f64 = 5.0;
/// Subtracted from the fare of a ride with the special discount.
pub const CORPORATE_DISCOUNT: f64 = 15.0;

/// The conditions the flat calculators adjust a fare for.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Conditions {
    /// The ride is during peak hours.
    pub peak_hours: bool,
    /// The ride starts at the airport.
    pub airport_pickup: bool,
    /// The ride has the special discount.
    pub special_discount: bool,
}

impl Conditions {
    /// Returns the conditions of a ride during peak hours.
    pub fn peak_hours() -> Conditions {
        Conditions {
            peak_hours: true,
            ..Conditions::default()
        }
    }

    /// Returns the conditions of a ride picked up at the airport.
    pub fn airport_pickup() -> Conditions {
        Conditions {
            airport_pickup: true,
            ..Conditions::default()
        }
    }
}

/// Calculates fares with one branch per ride type and condition.
///
/// Every new condition adds a parameter and every combination of rides
/// needs its own calculator, see [`CorporatePackageCalculator`].
///
/// # Examples
/// ```
/// # use memento::fare::{Conditions, FareCalculator};
/// let calculator = FareCalculator;
/// let fare = calculator.calculate_total_fare("UberX", 10.0, Conditions::peak_hours())?;
/// assert_eq!(fare, 21.0);
/// assert!(calculator.calculate_total_fare("UberPool", 10.0, Conditions::default()).is_err());
/// # Ok::<(), memento::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct FareCalculator;

impl FareCalculator {
    /// Returns the fare of a ride of `distance` km.
    ///
    /// # Errors
    /// Returns [`UnknownCategory`](crate::Error::UnknownCategory) if `ride_type` is not a known ride type.
    pub fn calculate_total_fare(
        &self,
        ride_type: &str,
        distance: f64,
        conditions: Conditions,
    ) -> Result<f64> {
        let ride_type = ride_type.parse::<RideType>()?;
        let mut total = ride_type.fare(distance);
        if conditions.peak_hours {
            total += PEAK_HOURS_SURCHARGE;
        }
        if conditions.airport_pickup {
            total += AIRPORT_FEE;
        }
        if conditions.special_discount {
            total -= CORPORATE_DISCOUNT;
        }
        debug!(%ride_type, distance, total, "calculated fare");
        Ok(total)
    }

    /// Returns a description of a ride of `distance` km.
    ///
    /// # Errors
    /// Returns [`UnknownCategory`](crate::Error::UnknownCategory) if `ride_type` is not a known ride type.
    pub fn describe(&self, ride_type: &str, distance: f64, conditions: Conditions) -> Result<String> {
        let ride_type = ride_type.parse::<RideType>()?;
        let mut description = format!("{ride_type} - {distance}km");
        if conditions.peak_hours {
            description += &format!(" + Peak Hours Surcharge (${PEAK_HOURS_SURCHARGE:.2})");
        }
        if conditions.airport_pickup {
            description += &format!(" + Airport Fee (${AIRPORT_FEE:.2})");
        }
        if conditions.special_discount {
            description += &format!(" - Corporate Discount (${CORPORATE_DISCOUNT:.2})");
        }
        Ok(description)
    }
}

/// Calculates the fare of a package of rides.
///
/// UberX rides are charged for peak hours and UberBlack rides for an
/// airport pickup.
///
/// # Examples
/// ```
/// # use memento::fare::CorporatePackageCalculator;
/// let fare = CorporatePackageCalculator.calculate_package_fare(
///     &[("UberX", 10.0), ("UberBlack", 10.0)],
///     true,
/// )?;
/// assert_eq!(fare, 41.0);
/// # Ok::<(), memento::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct CorporatePackageCalculator;

impl CorporatePackageCalculator {
    /// Returns the total fare of `rides`, given as pairs of ride type and distance.
    ///
    /// # Errors
    /// Returns [`UnknownCategory`](crate::Error::UnknownCategory) for the first unknown ride type.
    pub fn calculate_package_fare<R: AsRef<str>>(
        &self,
        rides: &[(R, f64)],
        has_discount: bool,
    ) -> Result<f64> {
        let calculator = FareCalculator;
        let mut total = 0.0;
        for (ride_type, distance) in rides {
            let ride_type = ride_type.as_ref();
            let conditions = Conditions {
                peak_hours: ride_type == "UberX",
                airport_pickup: ride_type == "UberBlack",
                special_discount: false,
            };
            total += calculator.calculate_total_fare(ride_type, *distance, conditions)?;
        }
        if has_discount {
            total -= CORPORATE_DISCOUNT;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn surcharges_apply_in_order() {
        let all = Conditions {
            peak_hours: true,
            airport_pickup: true,
            special_discount: true,
        };
        let fare = FareCalculator.calculate_total_fare("UberBlack", 4.0, all);
        assert_eq!(fare, Ok(5.0 + 10.0 + 3.5 + 5.0 - 15.0));
    }

    #[test]
    fn describe_every_condition() {
        let all = Conditions {
            peak_hours: true,
            airport_pickup: true,
            special_discount: true,
        };
        assert_eq!(
            FareCalculator.describe("UberX", 10.0, all).as_deref(),
            Ok("UberX - 10km + Peak Hours Surcharge ($3.50) + Airport Fee ($5.00) - Corporate Discount ($15.00)")
        );
    }

    #[test]
    fn unknown_ride_type_in_package() {
        let fare =
            CorporatePackageCalculator.calculate_package_fare(&[("UberX", 1.0), ("Bike", 2.0)], false);
        assert_eq!(fare, Err(Error::UnknownCategory("Bike".into())));
    }
}
