//! Per-reader progress through a book

use super::{Book, Bookmark, Percent};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Where a reader is and what they have finished
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingProgress {
    pub current_chapter_id: String,

    /// Position inside the current chapter
    pub chapter_progress: Percent,

    pub completed_chapter_ids: BTreeSet<String>,

    /// Count of numbered chapters in the book
    pub total_chapters: u32,

    /// At most one bookmark per chapter, keyed by chapter id
    pub bookmarks: HashMap<String, Bookmark>,
}

impl ReadingProgress {
    pub fn new(current_chapter_id: impl Into<String>, total_chapters: u32) -> Self {
        Self {
            current_chapter_id: current_chapter_id.into(),
            chapter_progress: Percent::ZERO,
            completed_chapter_ids: BTreeSet::new(),
            total_chapters,
            bookmarks: HashMap::new(),
        }
    }

    /// Fresh progress positioned at the first entry of `book`
    ///
    /// Returns `None` for a book without entries.
    pub fn for_book(book: &Book) -> Option<Self> {
        let first = book.entries().next()?;
        Some(Self::new(first.id.clone(), book.numbered_chapter_count()))
    }

    /// Record a chapter as finished; returns false if it already was
    pub fn mark_completed(&mut self, chapter_id: impl Into<String>) -> bool {
        self.completed_chapter_ids.insert(chapter_id.into())
    }

    pub fn is_completed(&self, chapter_id: &str) -> bool {
        self.completed_chapter_ids.contains(chapter_id)
    }

    /// Store a bookmark under its chapter id, returning the one it replaces
    pub fn set_bookmark(&mut self, bookmark: Bookmark) -> Option<Bookmark> {
        self.bookmarks.insert(bookmark.chapter_id.clone(), bookmark)
    }

    pub fn bookmark(&self, chapter_id: &str) -> Option<&Bookmark> {
        self.bookmarks.get(chapter_id)
    }

    pub fn remove_bookmark(&mut self, chapter_id: &str) -> Option<Bookmark> {
        self.bookmarks.remove(chapter_id)
    }
}
