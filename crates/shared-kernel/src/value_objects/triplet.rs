// crates/shared-kernel/src/value_objects/triplet.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// One base-1000 digit group of a number, always within `0..=999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Triplet(u16);

impl Triplet {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(999);
    pub const BASE: u64 = 1000;

    /// # Errors
    /// Returns [`DomainError::InvalidTriplet`] when `value` exceeds 999.
    pub fn new(value: u64) -> DomainResult<Self> {
        if value < Self::BASE {
            Ok(Self(value as u16))
        } else {
            Err(DomainError::InvalidTriplet { value })
        }
    }

    /// Lowest group of `number`, i.e. `number % 1000`.
    #[inline]
    pub const fn low_group_of(number: u64) -> Self {
        Self((number % Self::BASE) as u16)
    }

    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for Triplet {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<u64> for Triplet {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Triplet> for u64 {
    fn from(value: Triplet) -> Self {
        Self::from(value.0)
    }
}

impl From<Triplet> for u32 {
    fn from(value: Triplet) -> Self {
        Self::from(value.0)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:03}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
