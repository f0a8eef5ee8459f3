//! Saved reading positions

use super::Percent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved position inside one chapter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Id of the bookmarked chapter
    pub chapter_id: String,

    /// How far into the chapter
    pub progress: Percent,

    /// When the bookmark was saved
    pub timestamp: DateTime<Utc>,

    pub label: String,
}

impl Bookmark {
    /// Create a bookmark stamped with the current time
    pub fn new(chapter_id: impl Into<String>, progress: Percent, label: impl Into<String>) -> Self {
        Self::at(chapter_id, progress, label, Utc::now())
    }

    /// Create a bookmark with an explicit timestamp
    pub fn at(
        chapter_id: impl Into<String>,
        progress: Percent,
        label: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            chapter_id: chapter_id.into(),
            progress,
            timestamp,
            label: label.into(),
        }
    }
}
