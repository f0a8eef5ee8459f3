//! Chapter type representing a single entry of the book

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which part of the book an entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Front matter (title page, preface, ...)
    Front,

    /// Numbered chapters
    Chapter,

    /// Back matter (appendices, works cited, ...)
    Back,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Front, Section::Chapter, Section::Back];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Front => "front",
            Section::Chapter => "chapter",
            Section::Back => "back",
        }
    }

    /// Heading used when grouping entries in a table of contents
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Front => "Front Matter",
            Section::Chapter => "Chapters",
            Section::Back => "Back Matter",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Section::Front),
            "chapter" => Ok(Section::Chapter),
            "back" => Ok(Section::Back),
            other => Err(ParseError::InvalidSection(other.to_string())),
        }
    }
}

/// A single readable entry of a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Identifier, unique across the whole book
    pub id: String,

    /// Full title
    pub title: String,

    /// Short label for the sidebar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Display-only annotation (date range, rating marker)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    /// HTML body
    pub content: String,

    /// Base lock state; the licensing layer may override it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,

    pub section: Section,

    /// 1-based position among numbered chapters, 0 for front/back matter
    pub chapter_number: u32,
}

impl Chapter {
    /// Create a bare entry with empty content
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        section: Section,
        chapter_number: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            label: None,
            badge: None,
            content: String::new(),
            is_locked: None,
            section,
            chapter_number,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.is_locked = Some(locked);
        self
    }

    /// The sidebar label, falling back to the title
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.title)
    }

    /// Whether this entry is one of the numbered chapters
    pub fn is_numbered(&self) -> bool {
        self.section == Section::Chapter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parse() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>(), Ok(section));
        }
        assert_eq!(
            "appendix".parse::<Section>(),
            Err(ParseError::InvalidSection("appendix".to_string()))
        );
    }

    #[test]
    fn test_display_label_fallback() {
        let chapter = Chapter::new("ch1", "Chapter One", Section::Chapter, 1);
        assert_eq!(chapter.display_label(), "Chapter One");

        let chapter = chapter.with_label("One");
        assert_eq!(chapter.display_label(), "One");
    }

    #[test]
    fn test_builder_methods() {
        let chapter = Chapter::new("ch1", "One", Section::Chapter, 1)
            .with_badge("(1865 - 1877)")
            .with_content("<p>body</p>");
        assert_eq!(chapter.content, "<p>body</p>");
        assert_eq!(chapter.badge.as_deref(), Some("(1865 - 1877)"));
        assert_eq!(chapter.label, None);
    }

    #[test]
    fn test_chapter_serialization() {
        let chapter = Chapter::new("app-a", "Glossary", Section::Back, 0).with_locked(true);
        let json = serde_json::to_value(&chapter).unwrap();

        assert_eq!(json["section"], "back");
        assert_eq!(json["chapterNumber"], 0);
        assert_eq!(json["isLocked"], true);
        assert!(json.get("badge").is_none());

        let deserialized: Chapter = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, chapter);
    }

    #[test]
    fn test_chapter_deserialize_without_optionals() {
        let json = r#"{
            "id": "ch2",
            "title": "Two",
            "content": "<p>text</p>",
            "section": "chapter",
            "chapterNumber": 2
        }"#;
        let chapter: Chapter = serde_json::from_str(json).unwrap();
        assert_eq!(chapter.label, None);
        assert_eq!(chapter.is_locked, None);
        assert!(chapter.is_numbered());
    }
}
