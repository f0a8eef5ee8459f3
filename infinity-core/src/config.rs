//! Access-control constants
//!
//! These values are published for the reader's licensing layer. Nothing in
//! this crate enforces them.

use serde::Serialize;

/// Trial and licensing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessConfig {
    /// Number of numbered chapters readable during a trial
    pub trial_chapters: u32,

    /// Length of the trial period in days
    pub trial_days: u32,

    /// Prefix every issued license key starts with
    pub valid_license_prefix: &'static str,

    /// License key reserved for testing
    pub test_license: &'static str,
}

pub const CONFIG: AccessConfig = AccessConfig {
    trial_chapters: 2,
    trial_days: 7,
    valid_license_prefix: "INF-",
    test_license: "INF-TEST-2024",
};
