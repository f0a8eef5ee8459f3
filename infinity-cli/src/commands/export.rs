//! Export command implementation

use anyhow::{Context, Result};
use infinity_core::INFINITY_LOOP_BOOK;
use std::fs;

/// Export the whole book as pretty-printed JSON
pub fn export(output: Option<&str>) -> Result<()> {
    let json = INFINITY_LOOP_BOOK
        .to_json()
        .context("Failed to serialize book")?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            tracing::info!(path, bytes = json.len(), "Exported book");
        }
        None => println!("{}", json),
    }

    Ok(())
}
