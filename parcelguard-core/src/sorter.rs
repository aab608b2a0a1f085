//! Parcel sorter
//!
//! Decides which stack a parcel goes to:
//!
//! ```text
//! bulky = any side >= 150 cm  OR  width * height * length >= 1_000_000 cm³
//! heavy = mass >= 20 kg
//!
//! bulky AND heavy  -> REJECTED
//! bulky XOR heavy  -> SPECIAL
//! neither          -> STANDARD
//! ```
//!
//! The volume is the direct product of the three sides, multiplied smallest
//! side first so every orientation of a parcel rounds the same way.
//! Rearranging it (dividing the limit by two sides and comparing with the
//! third) rounds differently near the boundary and is not used.
//!
//! ## Properties
//!
//! - Swapping any two dimensions never changes the result
//! - Growing a single dimension or the mass never lowers the severity

use crate::{
    category::Category,
    constants::thresholds::{BULKY_DIMENSION_CM, BULKY_VOLUME_CM3, HEAVY_MASS_KG},
    errors::SortResult,
    measurement::RawMeasurement,
    package::Package,
    traits::Classifier,
};

/// Limits applied by the sorter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortingConstraints {
    /// Any side at or above this is bulky (cm)
    pub max_dimension_cm: f64,

    /// Volume at or above this is bulky (cm³)
    pub max_volume_cm3: f64,

    /// Mass at or above this is heavy (kg)
    pub max_mass_kg: f64,
}

/// Classifier over validated packages
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageSorter;

impl PackageSorter {
    /// Create a sorter
    pub const fn new() -> Self {
        Self
    }

    /// Fixed thresholds this sorter applies
    pub const fn constraints(&self) -> SortingConstraints {
        SortingConstraints {
            max_dimension_cm: BULKY_DIMENSION_CM,
            max_volume_cm3: BULKY_VOLUME_CM3,
            max_mass_kg: HEAVY_MASS_KG,
        }
    }
}

impl Classifier for PackageSorter {
    type Input = Package;

    fn classify(&self, input: &Package) -> Category {
        let category = input.category();

        #[cfg(feature = "log")]
        log::trace!(
            "sorted {}x{}x{} cm, {} kg -> {}",
            input.width_cm(),
            input.height_cm(),
            input.length_cm(),
            input.mass_kg(),
            category
        );

        category
    }
}

/// Validate and classify typed measurements
///
/// # Errors
///
/// [`SortError::InvalidValue`](crate::SortError::InvalidValue) when a value
/// is NaN, infinite, zero or negative.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> SortResult<Category> {
    let package = Package::new(width, height, length, mass)?;
    Ok(PackageSorter::new().classify(&package))
}

/// Coerce, validate and classify untyped measurements
///
/// ```
/// use parcelguard_core::{classify_raw, Category, ErrorKind};
///
/// assert_eq!(classify_raw(10, 10.5, "10", 1)?, Category::Standard);
/// assert_eq!(classify_raw("a", 10, 10, 1).unwrap_err().kind(), ErrorKind::InvalidType);
/// # Ok::<(), parcelguard_core::SortError>(())
/// ```
///
/// # Errors
///
/// [`SortError::InvalidType`](crate::SortError::InvalidType) when an input
/// is not a number (or is a boolean), otherwise as [`classify`].
pub fn classify_raw<'a>(
    width: impl Into<RawMeasurement<'a>>,
    height: impl Into<RawMeasurement<'a>>,
    length: impl Into<RawMeasurement<'a>>,
    mass: impl Into<RawMeasurement<'a>>,
) -> SortResult<Category> {
    let package = Package::from_raw(width, height, length, mass)?;
    Ok(PackageSorter::new().classify(&package))
}
