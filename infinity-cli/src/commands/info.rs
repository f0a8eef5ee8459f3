//! Info command implementation

use anyhow::Result;
use infinity_core::INFINITY_LOOP_BOOK;
use serde::Serialize;

/// Book info output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookInfo {
    title: String,
    front_matter: usize,
    chapters: usize,
    back_matter: usize,
    entries: usize,
}

/// Display information about the book
pub fn info(json: bool) -> Result<()> {
    let book = &*INFINITY_LOOP_BOOK;

    let info = BookInfo {
        title: book.title.clone(),
        front_matter: book.front_matter.len(),
        chapters: book.chapters.len(),
        back_matter: book.back_matter.len(),
        entries: book.len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:        {}", info.title);
        println!("Front matter: {}", info.front_matter);
        println!("Chapters:     {}", info.chapters);
        println!("Back matter:  {}", info.back_matter);
        println!("Entries:      {}", info.entries);
    }

    Ok(())
}
