//! Config command implementation

use anyhow::Result;
use infinity_core::CONFIG;

/// Print the trial and licensing constants
pub fn config(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&CONFIG)?);
    } else {
        println!("Trial chapters:       {}", CONFIG.trial_chapters);
        println!("Trial days:           {}", CONFIG.trial_days);
        println!("License prefix:       {}", CONFIG.valid_license_prefix);
        println!("Test license:         {}", CONFIG.test_license);
    }

    Ok(())
}
