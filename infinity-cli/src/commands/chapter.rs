//! Chapter command implementation

use anyhow::Result;
use infinity_core::INFINITY_LOOP_BOOK;

/// Show a single chapter's metadata and content
pub fn chapter(id: &str, json: bool) -> Result<()> {
    let book = &*INFINITY_LOOP_BOOK;
    let chapter = book.chapter(id)?;

    tracing::debug!(id, section = %chapter.section, "Found chapter");

    if json {
        println!("{}", serde_json::to_string_pretty(chapter)?);
        return Ok(());
    }

    println!("Id:       {}", chapter.id);
    println!("Title:    {}", chapter.title);
    println!("Section:  {}", chapter.section);
    if chapter.is_numbered() {
        println!("Number:   {}", chapter.chapter_number);
    }
    if let Some(badge) = &chapter.badge {
        println!("Badge:    {}", badge);
    }
    if let Some(prev) = book.previous(id) {
        println!("Previous: {}", prev.id);
    }
    if let Some(next) = book.next(id) {
        println!("Next:     {}", next.id);
    }
    println!();
    println!("{}", chapter.content);

    Ok(())
}
