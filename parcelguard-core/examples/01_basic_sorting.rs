//! Basic Parcel Sorting Example
//!
//! Sorts a handful of parcels with typed measurements and prints the stack
//! each one is routed to.
//!
//! ## What You'll Learn
//!
//! - The fixed sorting thresholds
//! - Classifying typed measurements
//! - Reading bulky/heavy flags from a validated `Package`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_sorting
//! ```

use parcelguard_core::{classify, Field, Package, PackageSorter};

fn main() {
    println!("ParcelGuard Basic Sorting Example");
    println!("=================================\n");

    let constraints = PackageSorter::new().constraints();
    println!("Sorting thresholds:");
    let side_unit = Field::Length.unit();
    println!("  Bulky side:   >= {} {}", constraints.max_dimension_cm, side_unit);
    println!("  Bulky volume: >= {} {}³", constraints.max_volume_cm3, side_unit);
    println!("  Heavy mass:   >= {} {}", constraints.max_mass_kg, Field::Mass.unit());
    println!();

    let parcels = [
        ((30.0, 20.0, 10.0, 2.0), "Shoe box"),
        ((100.0, 100.0, 100.0, 5.0), "Exactly one cubic metre"),
        ((160.0, 15.0, 15.0, 3.0), "Fishing rod"),
        ((40.0, 40.0, 40.0, 25.0), "Box of books"),
        ((150.0, 100.0, 100.0, 60.0), "Washing machine"),
        ((10.0, 10.0, 10.0, 0.0), "Weightless (invalid)"),
    ];

    for ((w, h, l, m), description) in parcels {
        print!("{:.<40} ", description);

        match classify(w, h, l, m) {
            Ok(category) => {
                println!("{}", category);
                if let Ok(package) = Package::new(w, h, l, m) {
                    println!(
                        "    volume {:.0} cm³, bulky: {}, heavy: {}",
                        package.volume_cm3(),
                        package.is_bulky(),
                        package.is_heavy()
                    );
                }
            }
            Err(e) => println!("ERROR: {}", e),
        }
    }
}
