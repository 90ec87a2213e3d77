use std::env;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use mural_core::render::{render_into_page, star_bar};
use mural_core::storage::{FileSlot, SLOT_FILE_NAME};
use mural_core::store::FeedbackStore;
use mural_core::{EntryId, FeedbackEntry};
use serde::Serialize;

use crate::error::CliError;

/// JSON list item for `mural list --json`.
#[derive(Debug, Serialize)]
pub struct EntryListItem {
    pub id: i64,
    pub name: String,
    pub feedback: String,
    pub rating: u8,
    pub timestamp: i64,
    pub relative_time: String,
}

pub fn open_store(store_path: &Path) -> Result<FeedbackStore, CliError> {
    let slot = FileSlot::new(store_path);
    Ok(FeedbackStore::load(Box::new(slot))?)
}

pub fn resolve_store_path(cli_store: Option<PathBuf>) -> PathBuf {
    cli_store
        .or_else(|| env::var_os("MURAL_STORE_PATH").map(PathBuf::from))
        .unwrap_or_else(default_store_path)
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mural")
        .join(SLOT_FILE_NAME)
}

pub fn resolve_page_path(cli_page: Option<PathBuf>) -> Option<PathBuf> {
    cli_page.or_else(|| env::var_os("MURAL_PAGE").map(PathBuf::from))
}

/// Re-render the board into the configured page, if any.
///
/// An unset page, an unreadable file, and a page without the board
/// container are all tolerated: rendering becomes a no-op.
pub fn refresh_page(store: &FeedbackStore, page_path: Option<&Path>) -> Result<(), CliError> {
    let Some(path) = page_path else {
        return Ok(());
    };

    let Ok(page) = std::fs::read_to_string(path) else {
        tracing::warn!(page = %path.display(), "feedback page not readable, skipping render");
        return Ok(());
    };

    match render_into_page(&page, store.entries()) {
        Some(updated) => {
            std::fs::write(path, updated)?;
            Ok(())
        }
        None => {
            tracing::warn!(page = %path.display(), "page has no board container, skipping render");
            Ok(())
        }
    }
}

pub fn resolve_feedback_text(parts: &[String]) -> Result<String, CliError> {
    if let Some(text) = normalize_text(&parts.join(" ")) {
        return Ok(text);
    }

    if let Some(text) = read_piped_stdin()? {
        return Ok(text);
    }

    Err(CliError::EmptyFeedbackText)
}

pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_text(&buffer))
}

pub fn parse_entry_id(raw: &str) -> Result<EntryId, CliError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| CliError::InvalidEntryId(trimmed.to_string()))
}

/// Ask for confirmation on stdin; anything but y/yes declines.
pub fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn format_entry_lines(entries: &[FeedbackEntry]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    entries
        .iter()
        .map(|entry| {
            let id = entry.id.to_string();
            let preview = feedback_preview(&entry.feedback, 40);
            let relative_time = format_relative_time(entry.timestamp, now_ms);

            format!(
                "{id:<13}  {name:<20}  {stars}  {relative_time:<10}  {preview}",
                name = truncate_chars(entry.display_name(), 20),
                stars = star_bar(entry.rating),
            )
        })
        .collect()
}

pub fn entry_to_list_item(entry: &FeedbackEntry) -> EntryListItem {
    let now_ms = Utc::now().timestamp_millis();

    EntryListItem {
        id: entry.id.as_i64(),
        name: entry.display_name().to_string(),
        feedback: entry.feedback.clone(),
        rating: entry.rating,
        timestamp: entry.timestamp,
        relative_time: format_relative_time(entry.timestamp, now_ms),
    }
}

pub fn feedback_preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}
