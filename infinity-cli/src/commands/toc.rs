//! Table of contents command implementation

use anyhow::Result;
use infinity_core::INFINITY_LOOP_BOOK;

/// Print the table of contents
pub fn toc(json: bool) -> Result<()> {
    let toc = INFINITY_LOOP_BOOK.toc();
    tracing::debug!(groups = toc.len(), "Built table of contents");

    if json {
        println!("{}", serde_json::to_string_pretty(&toc)?);
        return Ok(());
    }

    for group in &toc {
        println!("{}", group.title);
        for entry in &group.children {
            match &entry.badge {
                Some(badge) => println!("  {}  {}", entry.title, badge),
                None => println!("  {}", entry.title),
            }
        }
    }

    Ok(())
}
