//! User access tiers

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content-access tier of a reader
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// No trial started and no license
    #[default]
    None,

    /// Trial period
    Trial,

    /// Licensed
    Full,
}

impl AccessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::None => "none",
            AccessType::Trial => "trial",
            AccessType::Full => "full",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(AccessType::None),
            "trial" => Ok(AccessType::Trial),
            "full" => Ok(AccessType::Full),
            other => Err(ParseError::InvalidAccessType(other.to_string())),
        }
    }
}
