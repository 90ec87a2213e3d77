//! HTML rendering for the feedback board
//!
//! Pure functions from entries to markup. Free text always passes through
//! [`escape_html`] so a feedback body can never be interpreted as markup.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use crate::models::{FeedbackEntry, MAX_RATING};

/// Element id of the board container inside a host page.
pub const BOARD_CONTAINER_ID: &str = "feedbacksList";

/// Escape text for safe interpolation into HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Fixed-width five-symbol rating bar, e.g. `★★★☆☆` for 3.
///
/// Ratings above the maximum clamp to a full bar.
#[must_use]
pub fn star_bar(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Entry timestamp as a `dd/mm/yyyy` date.
#[must_use]
pub fn format_entry_date(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map_or_else(|| "-".to_string(), |date| date.format("%d/%m/%Y").to_string())
}

/// Render one read-only feedback card.
#[must_use]
pub fn render_entry_card(entry: &FeedbackEntry) -> String {
    let name = escape_html(entry.display_name());
    let initial = escape_html(&entry.initial());
    let date = format_entry_date(entry.timestamp);
    let stars = star_bar(entry.rating);
    let body = escape_html(&entry.feedback);

    format!(
        r#"<div class="feedback-item" data-feedback-id="{id}">
  <div class="feedback-header">
    <div class="feedback-user">
      <div class="user-avatar">{initial}</div>
      <div class="user-info">
        <h4>{name}</h4>
        <p class="timestamp">{date}</p>
      </div>
    </div>
    <div class="feedback-rating" title="{rating} stars">{stars}</div>
  </div>
  <p class="feedback-content">{body}</p>
</div>"#,
        id = entry.id,
        rating = entry.rating,
    )
}

/// Render the whole board: one card per entry, newest first.
///
/// Display order is computed here; the caller's entry order is untouched.
#[must_use]
pub fn render_board(entries: &[FeedbackEntry]) -> String {
    let mut sorted: Vec<&FeedbackEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| Reverse(entry.timestamp));

    sorted
        .iter()
        .map(|entry| render_entry_card(entry))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Render entries as pretty-printed JSON, newest first.
pub fn render_json(entries: &[FeedbackEntry]) -> serde_json::Result<String> {
    let mut sorted: Vec<&FeedbackEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| Reverse(entry.timestamp));
    serde_json::to_string_pretty(&sorted)
}

/// Render a complete standalone page embedding the board and footer year.
#[must_use]
pub fn render_page(entries: &[FeedbackEntry], year: i32) -> String {
    let board = render_board(entries);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Visitor feedback</title>
  <style>
    body {{ font-family: sans-serif; max-width: 640px; margin: 2rem auto; }}
    .feedback-item {{ border: 1px solid #ccc; border-radius: 6px; padding: 1rem; margin-bottom: 1rem; }}
    .feedback-header {{ display: flex; justify-content: space-between; }}
    .feedback-user {{ display: flex; gap: 0.6rem; }}
    .user-avatar {{ width: 2.2rem; height: 2.2rem; border-radius: 50%; background: #444; color: #fff; display: flex; align-items: center; justify-content: center; }}
    .user-info h4 {{ margin: 0; }}
    .timestamp {{ margin: 0; color: #777; font-size: 0.8rem; }}
    .feedback-rating {{ color: #d4a017; }}
    footer {{ text-align: center; color: #777; margin-top: 2rem; }}
  </style>
</head>
<body>
  <section class="feedback-section">
    <h2>Visitor feedback</h2>
    <div id="{container}">
{board}
    </div>
  </section>
  <footer>
    <p>&copy; <span id="year">{year}</span></p>
  </footer>
</body>
</html>
"#,
        container = BOARD_CONTAINER_ID,
    )
}

/// Rewrite the board container's contents inside an existing page.
///
/// Returns `None` when the page has no `feedbacksList` container, in which
/// case rendering is a no-op for the caller.
#[must_use]
pub fn render_into_page(page: &str, entries: &[FeedbackEntry]) -> Option<String> {
    let marker = format!("id=\"{BOARD_CONTAINER_ID}\"");
    let marker_at = page.find(&marker)?;
    let content_start = marker_at + page[marker_at..].find('>')? + 1;
    let content_end = container_end(page, content_start)?;

    let mut replaced = String::with_capacity(page.len());
    replaced.push_str(&page[..content_start]);
    replaced.push('\n');
    replaced.push_str(&render_board(entries));
    replaced.push('\n');
    replaced.push_str(&page[content_end..]);
    Some(replaced)
}

/// Find the start of the `</div>` closing the container whose contents
/// begin at `content_start`, tracking nested `<div>` markup.
fn container_end(page: &str, content_start: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut cursor = content_start;

    loop {
        let rest = &page[cursor..];
        let next_open = rest.find("<div");
        let next_close = rest.find("</div")?;

        match next_open {
            Some(open) if open < next_close => {
                depth += 1;
                cursor += open + "<div".len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(cursor + next_close);
                }
                cursor += next_close + "</div".len();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::EntryId;

    fn entry(id: i64, name: &str, feedback: &str, rating: u8) -> FeedbackEntry {
        FeedbackEntry {
            id: EntryId::new(id),
            name: name.to_string(),
            feedback: feedback.to_string(),
            rating,
            timestamp: id,
        }
    }

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b's"), "a &amp; b&#39;s");
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_star_bar_is_fixed_width() {
        assert_eq!(star_bar(0), "☆☆☆☆☆");
        assert_eq!(star_bar(3), "★★★☆☆");
        assert_eq!(star_bar(5), "★★★★★");
        // Out-of-range ratings clamp instead of breaking the bar
        assert_eq!(star_bar(9), "★★★★★");
    }

    #[test]
    fn test_format_entry_date() {
        // 2024-01-15 UTC
        assert_eq!(format_entry_date(1_705_276_800_000), "15/01/2024");
    }

    #[test]
    fn test_card_escapes_feedback_body() {
        let rendered = render_entry_card(&entry(1, "Ana", "<script>alert(1)</script>", 5));

        assert!(!rendered.contains("<script>"));
        assert!(rendered.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_card_escapes_name() {
        let rendered = render_entry_card(&entry(1, "<b>Ana</b>", "a perfectly valid feedback", 5));

        assert!(!rendered.contains("<b>"));
        assert!(rendered.contains("&lt;b&gt;Ana&lt;/b&gt;"));
    }

    #[test]
    fn test_card_uses_placeholder_for_blank_name() {
        let rendered = render_entry_card(&entry(1, "", "a perfectly valid feedback", 5));

        assert!(rendered.contains("<h4>Anonymous</h4>"));
        assert!(rendered.contains(r#"<div class="user-avatar">A</div>"#));
    }

    #[test]
    fn test_board_sorts_newest_first() {
        let entries = vec![
            entry(100, "a", "first feedback body", 5),
            entry(300, "b", "second feedback body", 5),
            entry(200, "c", "third feedback body", 5),
        ];

        let board = render_board(&entries);
        let pos_300 = board.find("data-feedback-id=\"300\"").unwrap();
        let pos_200 = board.find("data-feedback-id=\"200\"").unwrap();
        let pos_100 = board.find("data-feedback-id=\"100\"").unwrap();

        assert!(pos_300 < pos_200);
        assert!(pos_200 < pos_100);
    }

    #[test]
    fn test_board_render_is_idempotent() {
        let entries = vec![
            entry(100, "a", "first feedback body", 4),
            entry(200, "b", "second feedback body", 2),
        ];

        assert_eq!(render_board(&entries), render_board(&entries));
    }

    #[test]
    fn test_page_contains_container_and_year() {
        let page = render_page(&[entry(1, "Ana", "a perfectly valid feedback", 5)], 2026);

        assert!(page.contains(r#"<div id="feedbacksList">"#));
        assert!(page.contains(r#"<span id="year">2026</span>"#));
        assert!(page.contains("data-feedback-id=\"1\""));
    }

    #[test]
    fn test_render_into_page_replaces_container_contents() {
        let page = "<body><div id=\"feedbacksList\">\nold stuff\n</div><footer>keep</footer></body>";
        let updated =
            render_into_page(page, &[entry(1, "Ana", "a perfectly valid feedback", 5)]).unwrap();

        assert!(!updated.contains("old stuff"));
        assert!(updated.contains("data-feedback-id=\"1\""));
        assert!(updated.contains("<footer>keep</footer>"));
    }

    #[test]
    fn test_render_into_page_handles_nested_markup() {
        // A previous render left nested divs inside the container
        let page = render_page(&[entry(1, "Ana", "a perfectly valid feedback", 5)], 2026);
        let updated =
            render_into_page(&page, &[entry(2, "Bruno", "another valid feedback!", 3)]).unwrap();

        assert!(!updated.contains("data-feedback-id=\"1\""));
        assert!(updated.contains("data-feedback-id=\"2\""));
        assert!(updated.contains(r#"<span id="year">2026</span>"#));

        // Rewriting again with the same entries is stable
        let again =
            render_into_page(&updated, &[entry(2, "Bruno", "another valid feedback!", 3)]).unwrap();
        assert_eq!(again, updated);
    }

    #[test]
    fn test_render_into_page_without_container_is_none() {
        assert!(render_into_page("<body><p>no board here</p></body>", &[]).is_none());
    }

    #[test]
    fn test_render_json_sorts_newest_first() {
        let entries = vec![
            entry(100, "a", "first feedback body", 5),
            entry(300, "b", "second feedback body", 5),
        ];

        let json = render_json(&entries).unwrap();
        let decoded: Vec<FeedbackEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded[0].id, EntryId::new(300));
        assert_eq!(decoded[1].id, EntryId::new(100));
    }
}
