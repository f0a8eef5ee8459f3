//! Bounded percentage used for reading positions

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value in `0.0..=100.0`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd, Default)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percent(f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);
    pub const FULL: Percent = Percent(100.0);

    /// Create a percentage, rejecting NaN and values outside 0-100
    pub fn new(value: f64) -> Result<Self, ParseError> {
        if (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::PercentOutOfRange(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Percent {
    type Error = ParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for f64 {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
