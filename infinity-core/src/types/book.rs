//! The Book type - front matter, numbered chapters and back matter

use super::{Chapter, Section, TocEntry};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A complete publication
///
/// The three sequences are in presentation order and together partition
/// every entry of the book by [`Section`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub front_matter: Vec<Chapter>,
    pub chapters: Vec<Chapter>,
    pub back_matter: Vec<Chapter>,
}

impl Book {
    /// Create an empty book with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            front_matter: Vec::new(),
            chapters: Vec::new(),
            back_matter: Vec::new(),
        }
    }

    /// Append an entry to the sequence matching its section
    pub fn add(&mut self, chapter: Chapter) {
        match chapter.section {
            Section::Front => self.front_matter.push(chapter),
            Section::Chapter => self.chapters.push(chapter),
            Section::Back => self.back_matter.push(chapter),
        }
    }

    pub fn section(&self, section: Section) -> &[Chapter] {
        match section {
            Section::Front => &self.front_matter,
            Section::Chapter => &self.chapters,
            Section::Back => &self.back_matter,
        }
    }

    /// All entries in presentation order
    pub fn entries(&self) -> impl Iterator<Item = &Chapter> {
        self.front_matter
            .iter()
            .chain(&self.chapters)
            .chain(&self.back_matter)
    }

    pub fn len(&self) -> usize {
        self.front_matter.len() + self.chapters.len() + self.back_matter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn numbered_chapter_count(&self) -> u32 {
        self.chapters.len() as u32
    }

    pub fn find(&self, id: &str) -> Option<&Chapter> {
        self.entries().find(|c| c.id == id)
    }

    /// Like [`Book::find`], but a missing id is an error
    pub fn chapter(&self, id: &str) -> Result<&Chapter> {
        self.find(id)
            .ok_or_else(|| CatalogError::ChapterNotFound(id.to_string()).into())
    }

    /// Index of an entry in presentation order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries().position(|c| c.id == id)
    }

    /// The entry after `id`, crossing section boundaries
    pub fn next(&self, id: &str) -> Option<&Chapter> {
        let index = self.position(id)?;
        self.entries().nth(index + 1)
    }

    /// The entry before `id`, crossing section boundaries
    pub fn previous(&self, id: &str) -> Option<&Chapter> {
        let index = self.position(id)?;
        index.checked_sub(1).and_then(|i| self.entries().nth(i))
    }

    /// Table of contents grouped by section; empty sections are left out
    pub fn toc(&self) -> Vec<TocEntry> {
        Section::ALL
            .iter()
            .filter_map(|&section| {
                let entries = self.section(section);
                let first = entries.first()?;
                let children = entries
                    .iter()
                    .map(|c| {
                        TocEntry::new(c.display_label(), format!("#{}", c.id))
                            .with_level(1)
                            .with_badge(c.badge.clone())
                    })
                    .collect();
                Some(
                    TocEntry::new(section.heading(), format!("#{}", first.id))
                        .with_children(children),
                )
            })
            .collect()
    }

    /// Check section membership, chapter numbering and id uniqueness
    ///
    /// Reports the first violation found.
    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        for section in Section::ALL {
            for chapter in self.section(section) {
                if chapter.section != section {
                    return Err(CatalogError::SectionMismatch {
                        id: chapter.id.clone(),
                        expected: section,
                        found: chapter.section,
                    });
                }
                if section != Section::Chapter && chapter.chapter_number != 0 {
                    return Err(CatalogError::UnexpectedChapterNumber {
                        id: chapter.id.clone(),
                        section,
                        number: chapter.chapter_number,
                    });
                }
            }
        }

        for (index, chapter) in self.chapters.iter().enumerate() {
            let expected = index as u32 + 1;
            if chapter.chapter_number != expected {
                return Err(CatalogError::NumberingGap {
                    id: chapter.id.clone(),
                    expected,
                    found: chapter.chapter_number,
                });
            }
        }

        let mut seen = HashSet::new();
        for chapter in self.entries() {
            if !seen.insert(chapter.id.as_str()) {
                return Err(CatalogError::DuplicateId(chapter.id.clone()));
            }
        }

        Ok(())
    }

    /// Serialize as pretty-printed JSON in the reader's camelCase shape
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a book from JSON and check its structure
    pub fn from_json(json: &str) -> Result<Self> {
        let book: Book = serde_json::from_str(json)?;
        book.validate()?;
        Ok(book)
    }
}
