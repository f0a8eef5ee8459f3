//! Core types for the Infinity Loop reader

mod access;
mod book;
mod bookmark;
mod chapter;
mod percent;
mod progress;
mod toc;
mod user;

pub use access::AccessType;
pub use book::Book;
pub use bookmark::Bookmark;
pub use chapter::{Chapter, Section};
pub use percent::Percent;
pub use progress::ReadingProgress;
pub use toc::TocEntry;
pub use user::UserState;
