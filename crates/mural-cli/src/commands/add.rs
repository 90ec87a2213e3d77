use std::path::Path;

use mural_core::backend::SimulatedBackend;
use mural_core::models::RawSubmission;
use mural_core::store::unix_timestamp_millis;

use crate::commands::common::{open_store, refresh_page, resolve_feedback_text};
use crate::error::CliError;

pub async fn run_add(
    text_parts: &[String],
    name: Option<String>,
    rating: Option<String>,
    store_path: &Path,
    page_path: Option<&Path>,
) -> Result<(), CliError> {
    let feedback = resolve_feedback_text(text_parts)?;
    let mut store = open_store(store_path)?;

    let raw = RawSubmission {
        name,
        feedback,
        rating,
    };
    let entry = store.submit(raw, &SimulatedBackend::new()).await?;

    refresh_page(&store, page_path)?;

    if let Some(notice) = store.current_notice(unix_timestamp_millis()) {
        println!("{}", notice.text);
    }
    println!("{}", entry.id);
    Ok(())
}
