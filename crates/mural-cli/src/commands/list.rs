use std::path::Path;

use crate::commands::common::{entry_to_list_item, format_entry_lines, open_store, EntryListItem};
use crate::error::CliError;

pub fn run_list(as_json: bool, store_path: &Path) -> Result<(), CliError> {
    let store = open_store(store_path)?;
    let entries = store.sorted_entries();

    if as_json {
        let items = entries
            .iter()
            .map(entry_to_list_item)
            .collect::<Vec<EntryListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_entry_lines(&entries) {
            println!("{line}");
        }
    }

    Ok(())
}
