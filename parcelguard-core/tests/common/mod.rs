//! Common fixtures for integration tests
//!
//! Named parcel scenarios with their expected outcome, shared by the
//! classification and validation suites.

#![allow(dead_code)]

use parcelguard_core::{Category, ErrorKind};

/// A parcel and the category it must sort into
pub struct SortScenario {
    pub name: &'static str,
    pub dims: (f64, f64, f64),
    pub mass: f64,
    pub expected: Category,
}

const fn scenario(
    name: &'static str,
    dims: (f64, f64, f64),
    mass: f64,
    expected: Category,
) -> SortScenario {
    SortScenario { name, dims, mass, expected }
}

/// Parcels on and around every threshold
pub const BOUNDARY_SCENARIOS: &[SortScenario] = &[
    scenario("small and light", (10.0, 10.0, 10.0), 1.0, Category::Standard),
    scenario("volume exactly at limit", (100.0, 100.0, 100.0), 1.0, Category::Special),
    scenario("volume just below limit", (100.0, 100.0, 99.9999), 1.0, Category::Standard),
    scenario("volume just above limit", (100.0, 100.0, 100.0001), 1.0, Category::Special),
    scenario("side just below limit", (149.9999, 10.0, 10.0), 1.0, Category::Standard),
    scenario("width at limit", (150.0, 10.0, 10.0), 1.0, Category::Special),
    scenario("height at limit", (10.0, 150.0, 10.0), 1.0, Category::Special),
    scenario("length at limit", (10.0, 10.0, 150.0), 1.0, Category::Special),
    scenario("mass just below limit", (10.0, 10.0, 10.0), 19.9999, Category::Standard),
    scenario("mass at limit", (10.0, 10.0, 10.0), 20.0, Category::Special),
    scenario("mass well above limit", (10.0, 10.0, 10.0), 100.0, Category::Special),
    scenario("long side and heavy", (150.0, 100.0, 100.0), 20.0, Category::Rejected),
    scenario("huge and heavy", (1000.0, 1000.0, 1000.0), 20.0, Category::Rejected),
    scenario("flat sheet under volume limit", (149.0, 149.0, 45.0), 19.0, Category::Standard),
    scenario("flat sheet over volume limit", (149.0, 149.0, 46.0), 19.0, Category::Special),
];

/// Sides whose product rounds to opposite sides of the volume limit
/// depending on multiplication order (`w*h*l` below, `w*l*h` at or above)
pub const ORDER_SENSITIVE_VOLUME: (f64, f64, f64) =
    (136.92239903224745, 136.34792409415445, 53.56448947344375);

/// Typed inputs that must fail, with the expected error kind
pub const INVALID_TYPED: &[((f64, f64, f64, f64), ErrorKind)] = &[
    ((0.0, 10.0, 10.0, 1.0), ErrorKind::InvalidValue),
    ((10.0, 0.0, 10.0, 1.0), ErrorKind::InvalidValue),
    ((10.0, 10.0, 0.0, 1.0), ErrorKind::InvalidValue),
    ((10.0, 10.0, 10.0, 0.0), ErrorKind::InvalidValue),
    ((-1.0, 10.0, 10.0, 1.0), ErrorKind::InvalidValue),
    ((10.0, -1.0, 10.0, 1.0), ErrorKind::InvalidValue),
    ((10.0, 10.0, -1.0, 1.0), ErrorKind::InvalidValue),
    ((10.0, 10.0, 10.0, -1.0), ErrorKind::InvalidValue),
    ((10.0, 10.0, 10.0, f64::NAN), ErrorKind::InvalidValue),
    ((10.0, 10.0, 10.0, f64::INFINITY), ErrorKind::InvalidValue),
    ((f64::NEG_INFINITY, 10.0, 10.0, 1.0), ErrorKind::InvalidValue),
];

/// All orderings of three dimensions
pub fn permutations(dims: (f64, f64, f64)) -> [(f64, f64, f64); 6] {
    let (a, b, c) = dims;
    [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)]
}
