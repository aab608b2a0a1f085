//! Measurement validator
//!
//! Validates a single width, height, length or mass value:
//! - Typed `f64` input: finiteness, then strict positivity
//! - Raw input: coercion first (booleans rejected), then the same checks

use crate::{
    errors::SortResult,
    measurement::{Field, RawMeasurement},
    traits::Validator,
};

use super::utils;

/// Validator for parcel measurements
///
/// Stateless. One instance can be shared by any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementValidator;

impl MeasurementValidator {
    /// Create a validator
    pub const fn new() -> Self {
        Self
    }
}

impl Validator<f64> for MeasurementValidator {
    fn validate(&self, field: Field, value: f64) -> SortResult<f64> {
        utils::check_measurement(field, value).map_err(|e| {
            #[cfg(feature = "log")]
            log::debug!("rejected {} = {}: {}", field, value, e);
            e
        })
    }
}

impl<'a> Validator<RawMeasurement<'a>> for MeasurementValidator {
    fn validate(&self, field: Field, value: RawMeasurement<'a>) -> SortResult<f64> {
        let coerced = utils::coerce(field, value).map_err(|e| {
            #[cfg(feature = "log")]
            log::debug!("rejected {} ({}): {}", field, value.type_name(), e);
            e
        })?;

        Validator::<f64>::validate(self, field, coerced)
    }
}
