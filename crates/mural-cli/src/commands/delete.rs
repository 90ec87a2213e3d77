use std::path::Path;

use crate::commands::common::{confirm, open_store, parse_entry_id, refresh_page};
use crate::error::CliError;

pub fn run_delete(
    id: &str,
    skip_confirmation: bool,
    store_path: &Path,
    page_path: Option<&Path>,
) -> Result<(), CliError> {
    let id = parse_entry_id(id)?;
    let mut store = open_store(store_path)?;

    if !skip_confirmation && !confirm(&format!("Delete feedback entry {id}?"))? {
        println!("Aborted");
        return Ok(());
    }

    if store.delete_by_id(id)? {
        refresh_page(&store, page_path)?;
        println!("Deleted {id}");
    } else {
        println!("No feedback entry found with id {id}");
    }

    Ok(())
}
