//! Parcel Measurement Validators
//!
//! ## Overview
//!
//! Every measurement passes through validation before the sorter sees it.
//! The classifier itself never checks its inputs: a [`Package`] can only be
//! built from values that survived these checks.
//!
//! [`Package`]: crate::Package
//!
//! ## Validation Layers
//!
//! ### 1. Type
//! Is the input a number at all? Integers and floats are accepted, text is
//! accepted when it parses as a decimal number. Booleans, nulls and
//! structured values are rejected with `InvalidType`.
//!
//! ### 2. Finiteness
//! NaN and infinities are rejected with `InvalidValue`.
//!
//! ### 3. Positivity
//! A parcel cannot have a zero or negative side, or weigh nothing. Zero and
//! negative values are rejected with `InvalidValue`.
//!
//! ## Usage Example
//!
//! ```rust
//! use parcelguard_core::{Field, MeasurementValidator, RawMeasurement, Validator};
//!
//! let validator = MeasurementValidator::new();
//!
//! let width = validator.validate(Field::Width, 42.0_f64)?;
//! let mass = validator.validate(Field::Mass, RawMeasurement::Text("3.5"))?;
//! assert_eq!((width, mass), (42.0, 3.5));
//!
//! assert!(validator.validate(Field::Height, RawMeasurement::Bool(true)).is_err());
//! # Ok::<(), parcelguard_core::SortError>(())
//! ```

mod measurement;
pub mod utils;

pub use measurement::MeasurementValidator;
