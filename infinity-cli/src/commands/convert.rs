//! Convert command implementation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use infinity_core::manuscript::convert_file;
use std::path::Path;

/// Re-encode Windows-1252 manuscript files in place as UTF-8
pub fn convert(files: &[String]) -> Result<()> {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:30.green} {pos}/{len} {msg}")
            .context("Invalid progress template")?,
    );

    let mut converted = 0usize;
    for file in files {
        let path = Path::new(file);
        if !path.exists() {
            tracing::warn!(path = %file, "Skipping missing file");
            pb.suspend(|| println!("SKIP: {} not found", file));
            pb.inc(1);
            continue;
        }

        pb.set_message(format!("Converting {}...", file));
        convert_file(path).with_context(|| format!("Failed to convert {}", file))?;
        converted += 1;

        pb.suspend(|| println!("Converted {} to UTF-8", file));
        pb.inc(1);
    }

    pb.finish_and_clear();
    tracing::info!(converted, skipped = files.len() - converted, "Conversion finished");

    Ok(())
}
