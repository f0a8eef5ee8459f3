//! Licensing state of a reader

use super::AccessType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who is reading and what they may access
///
/// These are plain constructors: license keys and trial windows are not
/// checked here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub email: Option<String>,
    pub name: Option<String>,
    pub access_type: AccessType,
    pub license_key: Option<String>,
    pub trial_start_date: Option<DateTime<Utc>>,
}

impl UserState {
    /// A reader who started a trial at `started`
    pub fn trial(email: impl Into<String>, started: DateTime<Utc>) -> Self {
        Self {
            email: Some(email.into()),
            access_type: AccessType::Trial,
            trial_start_date: Some(started),
            ..Self::default()
        }
    }

    /// A reader holding a license key
    pub fn licensed(email: impl Into<String>, license_key: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            access_type: AccessType::Full,
            license_key: Some(license_key.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_anonymous_default() {
        let user = UserState::default();
        assert_eq!(user.access_type, AccessType::None);
        assert!(user.email.is_none());
        assert!(user.license_key.is_none());
    }

    #[test]
    fn test_user_serialization_keeps_nulls() {
        let started = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let user = UserState::trial("reader@example.com", started);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["accessType"], "trial");
        assert_eq!(json["trialStartDate"], "2024-01-15T09:00:00Z");
        assert!(json["name"].is_null());
        assert!(json["licenseKey"].is_null());

        let deserialized: UserState = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, user);
    }

    #[test]
    fn test_licensed_keeps_key_verbatim() {
        let user = UserState::licensed("a@b.c", "not-a-real-key").with_name("Ada");
        assert_eq!(user.access_type, AccessType::Full);
        assert_eq!(user.license_key.as_deref(), Some("not-a-real-key"));
        assert_eq!(user.name.as_deref(), Some("Ada"));
    }
}
