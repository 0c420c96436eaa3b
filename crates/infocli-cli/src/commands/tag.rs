//! Tag command handlers

use anyhow::Result;

use infocli_core::Store;

use crate::output::Output;

/// List all note tags with usage counts
pub fn list(store: &Store, output: &Output) -> Result<()> {
    let tags = store.notes().tags_with_counts();
    output.print_tags(&tags);
    Ok(())
}
