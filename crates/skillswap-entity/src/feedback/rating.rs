//! Validated feedback rating.

use serde::{Deserialize, Serialize};
use std::fmt;

use skillswap_core::AppError;

/// A rating in the inclusive range `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: i32 = 1;
    /// Highest accepted rating.
    pub const MAX: i32 = 5;

    /// Validate and wrap a raw rating.
    pub fn new(value: i32) -> Result<Self, AppError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(AppError::validation(format!(
                "Rating must be between {} and {}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Raw value as stored in the database.
    pub fn value(&self) -> i32 {
        i32::from(self.0)
    }
}

impl TryFrom<i32> for Rating {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
