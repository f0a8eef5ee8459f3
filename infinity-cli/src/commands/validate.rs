//! Validate command implementation

use anyhow::{Context, Result};
use infinity_core::INFINITY_LOOP_BOOK;

/// Validate the catalog structure
pub fn validate() -> Result<()> {
    let book = &*INFINITY_LOOP_BOOK;

    book.validate()
        .with_context(|| format!("Validation failed for \"{}\"", book.title))?;

    tracing::info!(entries = book.len(), "Catalog validated");
    println!("Catalog is valid");
    println!("  Title: {}", book.title);
    println!("  Entries: {}", book.len());
    println!("  Numbered chapters: {}", book.numbered_chapter_count());

    Ok(())
}
