//! Handling categories
//!
//! The three stacks a parcel can be routed to. Categories are ordered by
//! severity, so `Standard < Special < Rejected` and callers can compare
//! outcomes directly.

use core::fmt;
use core::str::FromStr;

/// Destination stack for a parcel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Category {
    /// Neither bulky nor heavy, normal handling
    Standard,
    /// Bulky or heavy, but not both
    Special,
    /// Bulky and heavy
    Rejected,
}

impl Category {
    /// All categories, least severe first
    pub const ALL: [Category; 3] = [Category::Standard, Category::Special, Category::Rejected];

    /// Build from the two sorting flags
    pub const fn from_flags(is_bulky: bool, is_heavy: bool) -> Self {
        match (is_bulky, is_heavy) {
            (true, true) => Category::Rejected,
            (true, false) | (false, true) => Category::Special,
            (false, false) => Category::Standard,
        }
    }

    /// Label used on the wire and in reports
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }

    /// 0 for standard, 1 for special, 2 for rejected
    pub const fn severity(&self) -> u8 {
        *self as u8
    }

    /// Parcel cannot be accepted
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Category::Rejected)
    }

    /// Parcel needs anything other than the standard stack
    pub const fn requires_special_handling(&self) -> bool {
        !matches!(self, Category::Standard)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of the three category names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCategory;

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of STANDARD, SPECIAL, REJECTED")
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(UnknownCategory)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Category {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}
