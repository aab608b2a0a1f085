//! Measurement inputs
//!
//! Typed callers hand the sorter plain `f64` values. Callers that receive
//! loosely typed input (decoded JSON, form fields, values from a scripting
//! host) wrap each value in a [`RawMeasurement`] and let the validator decide
//! whether it is a usable number.

use core::fmt;

/// Which of the four parcel measurements a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    /// Width in centimetres
    Width,
    /// Height in centimetres
    Height,
    /// Length in centimetres
    Length,
    /// Mass in kilograms
    Mass,
}

impl Field {
    /// All fields in argument order
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    /// Lowercase field name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }

    /// Unit the measurement is expressed in
    pub const fn unit(&self) -> &'static str {
        match self {
            Field::Width | Field::Height | Field::Length => "cm",
            Field::Mass => "kg",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A measurement as received from an untyped source
///
/// Only numeric variants, and text that parses as a decimal number, can
/// become a valid measurement. Booleans are rejected outright even though
/// some hosts treat them as `0`/`1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawMeasurement<'a> {
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Boolean, never accepted
    Bool(bool),
    /// Text, accepted when it parses as a number
    Text(&'a str),
    /// Missing value
    Null,
    /// Anything else (arrays, objects, ...), described by a static name
    Unsupported(&'static str),
}

impl RawMeasurement<'_> {
    /// Short name of the supplied type, used in error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            RawMeasurement::Int(_) | RawMeasurement::UInt(_) => "integer",
            RawMeasurement::Float(_) => "float",
            RawMeasurement::Bool(_) => "boolean",
            RawMeasurement::Text(_) => "text",
            RawMeasurement::Null => "null",
            RawMeasurement::Unsupported(name) => *name,
        }
    }
}

impl From<f64> for RawMeasurement<'_> {
    fn from(value: f64) -> Self {
        RawMeasurement::Float(value)
    }
}

impl From<f32> for RawMeasurement<'_> {
    fn from(value: f32) -> Self {
        RawMeasurement::Float(value as f64)
    }
}

impl From<bool> for RawMeasurement<'_> {
    fn from(value: bool) -> Self {
        RawMeasurement::Bool(value)
    }
}

impl<'a> From<&'a str> for RawMeasurement<'a> {
    fn from(value: &'a str) -> Self {
        RawMeasurement::Text(value)
    }
}

impl<'a, T> From<Option<T>> for RawMeasurement<'a>
where
    T: Into<RawMeasurement<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(RawMeasurement::Null, Into::into)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for RawMeasurement<'_> {
            fn from(value: $t) -> Self {
                RawMeasurement::Int(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for RawMeasurement<'_> {
            fn from(value: $t) -> Self {
                RawMeasurement::UInt(value as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

#[cfg(feature = "json")]
impl<'a> From<&'a serde_json::Value> for RawMeasurement<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => RawMeasurement::Null,
            Value::Bool(b) => RawMeasurement::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawMeasurement::Int(i)
                } else if let Some(u) = n.as_u64() {
                    RawMeasurement::UInt(u)
                } else {
                    // Without arbitrary_precision every other number is an f64
                    n.as_f64().map_or(RawMeasurement::Unsupported("number"), RawMeasurement::Float)
                }
            }
            Value::String(s) => RawMeasurement::Text(s.as_str()),
            Value::Array(_) => RawMeasurement::Unsupported("array"),
            Value::Object(_) => RawMeasurement::Unsupported("object"),
        }
    }
}
