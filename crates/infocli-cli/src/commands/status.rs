//! Status command handler

use std::path::PathBuf;

use anyhow::Result;

use infocli_core::{Config, Store};

use crate::output::{Output, OutputFormat};

/// Show where data lives and how much of it there is
pub fn show(
    store: &Store,
    config: &Config,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let snapshot = store.persistence().path();
    let snapshot_size = std::fs::metadata(snapshot).map(|m| m.len()).unwrap_or(0);
    let config_file = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "config_file": config_file,
                    "snapshot": snapshot,
                    "snapshot_exists": store.persistence().exists(),
                    "snapshot_size": snapshot_size,
                    "log_file": config.log_path(),
                    "counts": {
                        "contacts": store.contacts().len(),
                        "notes": store.notes().len()
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", snapshot.display());
        }
        OutputFormat::Human => {
            println!("InfoCLI Status");
            println!("==============");
            println!();
            println!("Storage:");
            println!("  Snapshot: {}", snapshot.display());
            if store.persistence().exists() {
                println!("  Size:     {} bytes", snapshot_size);
            } else {
                println!("  Size:     (not saved yet)");
            }
            println!("  Log file: {}", config.log_path().display());
            println!("  Config:   {}", config_file.display());
            println!();
            println!("Contents:");
            println!("  Contacts: {}", store.contacts().len());
            println!("  Notes:    {}", store.notes().len());
        }
    }

    Ok(())
}
