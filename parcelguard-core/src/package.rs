//! Validated parcel
//!
//! A [`Package`] holds four measurements that have already passed
//! validation. The only ways to build one are [`Package::new`],
//! [`Package::from_raw`] and (with `serde`) deserialization, all of which
//! validate first. Code holding a `Package` never re-checks its fields.

use crate::{
    category::Category,
    constants::thresholds::{BULKY_DIMENSION_CM, BULKY_VOLUME_CM3, HEAVY_MASS_KG},
    errors::SortResult,
    measurement::{Field, RawMeasurement},
    traits::Validator,
    validators::{utils, MeasurementValidator},
};

/// Parcel with validated dimensions (cm) and mass (kg)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedPackage"))]
pub struct Package {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

/// Wire shape of a parcel before validation
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedPackage {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedPackage> for Package {
    type Error = crate::errors::SortError;

    fn try_from(raw: UncheckedPackage) -> Result<Self, Self::Error> {
        Package::new(raw.width, raw.height, raw.length, raw.mass)
    }
}

impl Package {
    /// Validate typed measurements, in argument order
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> SortResult<Self> {
        let validator = MeasurementValidator::new();

        Ok(Self {
            width: validator.validate(Field::Width, width)?,
            height: validator.validate(Field::Height, height)?,
            length: validator.validate(Field::Length, length)?,
            mass: validator.validate(Field::Mass, mass)?,
        })
    }

    /// Coerce and validate untyped measurements
    ///
    /// All four inputs are coerced before any range check runs, so a type
    /// error in a later field wins over a value error in an earlier one.
    pub fn from_raw<'a>(
        width: impl Into<RawMeasurement<'a>>,
        height: impl Into<RawMeasurement<'a>>,
        length: impl Into<RawMeasurement<'a>>,
        mass: impl Into<RawMeasurement<'a>>,
    ) -> SortResult<Self> {
        let coerced = [
            (Field::Width, width.into()),
            (Field::Height, height.into()),
            (Field::Length, length.into()),
            (Field::Mass, mass.into()),
        ];

        let mut values = [0.0_f64; 4];
        for (slot, (field, raw)) in values.iter_mut().zip(coerced) {
            *slot = utils::coerce(field, raw).map_err(|e| {
                #[cfg(feature = "log")]
                log::debug!("rejected {} ({}): {}", field, raw.type_name(), e);
                e
            })?;
        }

        let [width, height, length, mass] = values;
        Self::new(width, height, length, mass)
    }

    /// Width in centimetres
    pub fn width_cm(&self) -> f64 {
        self.width
    }

    /// Height in centimetres
    pub fn height_cm(&self) -> f64 {
        self.height
    }

    /// Length in centimetres
    pub fn length_cm(&self) -> f64 {
        self.length
    }

    /// Mass in kilograms
    pub fn mass_kg(&self) -> f64 {
        self.mass
    }

    /// Dimensions in argument order
    pub fn dimensions_cm(&self) -> [f64; 3] {
        [self.width, self.height, self.length]
    }

    /// `width * height * length`, may be `+inf` for absurdly large parcels
    ///
    /// Sides are multiplied smallest first. `f64` multiplication is not
    /// associative, so a fixed order keeps the rounding, and therefore the
    /// bulkiness decision, the same for every orientation of the parcel.
    pub fn volume_cm3(&self) -> f64 {
        let mut sides = self.dimensions_cm();
        sides.sort_unstable_by(f64::total_cmp);
        let [a, b, c] = sides;
        a * b * c
    }

    /// Any side reaches the dimension limit, or the volume reaches the
    /// volume limit
    pub fn is_bulky(&self) -> bool {
        self.dimensions_cm().iter().any(|&d| d >= BULKY_DIMENSION_CM)
            || self.volume_cm3() >= BULKY_VOLUME_CM3
    }

    /// Mass reaches the mass limit
    pub fn is_heavy(&self) -> bool {
        self.mass >= HEAVY_MASS_KG
    }

    /// Handling category for this parcel
    pub fn category(&self) -> Category {
        Category::from_flags(self.is_bulky(), self.is_heavy())
    }
}
