//! Infinity Loop Core Library
//!
//! This crate provides the content catalog and the reader-facing types for
//! "The Infinity Loop". The catalog is a single immutable [`Book`] built once
//! on first access; the progress, bookmark and licensing types are plain data
//! shapes owned by the reader application. [`manuscript`] re-encodes the
//! exported chapter files as UTF-8.

pub mod catalog;
pub mod config;
pub mod error;
pub mod manuscript;
pub mod types;

pub use catalog::{create_chapter, placeholder_content, INFINITY_LOOP_BOOK};
pub use config::{AccessConfig, CONFIG};
pub use error::{CatalogError, InfinityError, ParseError, Result};
pub use types::{
    AccessType, Book, Bookmark, Chapter, Percent, ReadingProgress, Section, TocEntry, UserState,
};
