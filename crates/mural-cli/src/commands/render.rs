use std::path::Path;

use chrono::{Datelike, Utc};
use mural_core::render::{render_json, render_page};

use crate::cli::RenderFormat;
use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_render(
    format: RenderFormat,
    output_path: Option<&Path>,
    store_path: &Path,
) -> Result<(), CliError> {
    let store = open_store(store_path)?;
    let rendered = match format {
        RenderFormat::Html => render_page(store.entries(), Utc::now().year()),
        RenderFormat::Json => render_json(store.entries())?,
    };

    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
