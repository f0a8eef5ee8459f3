//! Table of contents types

use serde::{Deserialize, Serialize};

/// A single entry in the table of contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TocEntry {
    /// Display title
    pub title: String,

    /// Anchor of the target entry (`#<chapter id>`)
    pub href: String,

    /// Nesting level (0 = section group)
    pub level: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,

    /// Child entries for nested TOC
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    /// Create a new TOC entry
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            level: 0,
            badge: None,
            children: Vec::new(),
        }
    }

    /// Set the nesting level
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_badge(mut self, badge: Option<String>) -> Self {
        self.badge = badge;
        self
    }

    /// Add child entries
    pub fn with_children(mut self, children: Vec<TocEntry>) -> Self {
        self.children = children;
        self
    }

    /// Render this entry and its children as an indented outline
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out);
        out
    }

    fn write_outline(&self, out: &mut String) {
        out.push_str(&"  ".repeat(self.level as usize));
        out.push_str(&self.title);
        out.push('\n');
        for child in &self.children {
            child.write_outline(out);
        }
    }
}
