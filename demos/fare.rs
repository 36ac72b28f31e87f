use memento::fare::{
    CompositeRide, Conditions, CorporatePackageCalculator, FareCalculator, RideComponent,
    RideType, SingleRide, Surcharge,
};
use tracing_subscriber::EnvFilter;

fn print(label: &str, component: &impl RideComponent) {
    println!("{label} Fare: ${:.2}", component.compute_fare());
    println!("{label} Description: {}", component.describe());
    println!("---------------");
}

fn main() -> memento::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("# Flat calculator\n");
    let calculator = FareCalculator;
    for (label, ride_type, conditions) in [
        ("UberX", "UberX", Conditions::default()),
        ("Peak Hour Ride", "UberX", Conditions::peak_hours()),
        ("Airport Ride", "UberBlack", Conditions::airport_pickup()),
    ] {
        let fare = calculator.calculate_total_fare(ride_type, 10.0, conditions)?;
        println!("{label} Fare: ${fare:.2}");
        println!(
            "{label} Description: {}",
            calculator.describe(ride_type, 10.0, conditions)?
        );
        println!("---------------");
    }
    let package = CorporatePackageCalculator
        .calculate_package_fare(&[("UberX", 10.0), ("UberBlack", 10.0)], true)?;
    println!("Corporate Package Fare: ${package:.2}");

    println!("\n# Composite\n");
    let uber_x = SingleRide::new(RideType::UberX, 10.0, 2.5, 1.5);
    let uber_black = SingleRide::new(RideType::UberBlack, 10.0, 5.0, 2.5);
    print("UberX", &uber_x);
    print("UberBlack", &uber_black);

    let mut standard = CompositeRide::new("Standard Ride with Surge");
    standard.add(uber_x);
    standard.add(Surcharge::new("Peak Hours", 3.5));
    print("Standard Ride with Surge", &standard);

    let mut premium = CompositeRide::new("Premium Airport Pickup");
    premium.add(uber_black);
    premium.add(Surcharge::new("Airport Fee", 5.0));
    print("Premium Airport Ride", &premium);

    let mut corporate = CompositeRide::new("Corporate Package");
    corporate.add(standard);
    corporate.add(premium);
    print("Corporate Package Total", &corporate);

    println!("\nModifying the Corporate Package...");
    corporate.add(Surcharge::new("Corporate Discount", -15.0));
    print("Updated Corporate Package", &corporate);
    Ok(())
}
