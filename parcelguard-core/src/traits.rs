//! Core traits for validators and classifiers
//!
//! These traits define the seams between input handling and the sorting
//! decision. Keep them simple: a validator turns one input into one clean
//! `f64`, a classifier turns a clean parcel into a category.

use crate::category::Category;
use crate::errors::SortResult;
use crate::measurement::Field;

/// Turns a single input of type `V` into a validated measurement
pub trait Validator<V> {
    /// Validate one measurement, returning the coerced value
    fn validate(&self, field: Field, value: V) -> SortResult<f64>;
}

/// Decides the handling category for validated input
pub trait Classifier {
    /// Input type (usually a validated parcel)
    type Input;

    /// Classify the input. Never fails: validation has already happened.
    fn classify(&self, input: &Self::Input) -> Category;
}

/// Trait for values that can be checked for numeric sanity
pub trait Validatable {
    /// Check if the value is a real number (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
