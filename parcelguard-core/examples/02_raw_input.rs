//! Untyped Input Example
//!
//! Shows how a wrapping layer that receives loosely typed values (form
//! fields, script arguments) hands them to the sorter, and how it can map
//! the two error kinds to its own exit codes.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_raw_input
//! ```

use parcelguard_core::{classify_raw, ErrorKind, RawMeasurement, SortError};

fn exit_code(error: &SortError) -> i32 {
    match error.kind() {
        ErrorKind::InvalidType => 2,
        ErrorKind::InvalidValue => 3,
    }
}

fn main() {
    println!("ParcelGuard Untyped Input Example");
    println!("=================================\n");

    let cases: [([RawMeasurement<'static>; 4], &str); 6] = [
        ([10.into(), 10.into(), 10.into(), 1.into()], "Integers"),
        (["100".into(), "100".into(), "100".into(), "1".into()], "Numeric text"),
        ([true.into(), 10.into(), 10.into(), 1.into()], "Boolean width"),
        (["a".into(), 10.into(), 10.into(), 1.into()], "Non-numeric text"),
        ([10.into(), 10.into(), 10.into(), f64::NAN.into()], "NaN mass"),
        ([10.into(), RawMeasurement::Null, 10.into(), 1.into()], "Missing height"),
    ];

    for ([w, h, l, m], description) in cases {
        print!("{:.<30} ", description);

        match classify_raw(w, h, l, m) {
            Ok(category) => println!("{}", category),
            Err(e) => println!("exit {} ({})", exit_code(&e), e),
        }
    }
}
