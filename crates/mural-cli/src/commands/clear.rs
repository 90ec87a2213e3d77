use std::path::Path;

use crate::commands::common::{confirm, open_store, refresh_page};
use crate::error::CliError;

pub fn run_clear(
    skip_confirmation: bool,
    store_path: &Path,
    page_path: Option<&Path>,
) -> Result<(), CliError> {
    let mut store = open_store(store_path)?;
    let count = store.entries().len();

    if !skip_confirmation && !confirm(&format!("Delete ALL {count} feedback entries?"))? {
        println!("Aborted");
        return Ok(());
    }

    store.delete_all()?;
    refresh_page(&store, page_path)?;
    println!("Deleted {count} feedback entries");

    Ok(())
}
