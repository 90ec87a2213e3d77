//! Typed submission input and validation

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::entry::{ANONYMOUS_NAME, MAX_RATING};

/// Minimum feedback body length after trimming, in characters.
pub const MIN_FEEDBACK_CHARS: usize = 10;

/// Rating substituted when the submitted value is absent or unusable.
pub const DEFAULT_RATING: u8 = 5;

/// Raw form input for a feedback submission.
///
/// Fields arrive as the form produced them; defaulting and validation
/// happen in [`NewFeedback::from_raw`].
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    /// Visitor name; absent or blank submits as anonymous
    pub name: Option<String>,
    /// Feedback body
    pub feedback: String,
    /// Rating as submitted; unusable values fall back to the default
    pub rating: Option<String>,
}

/// A validated candidate entry, not yet assigned an id.
///
/// This is the shape handed to a [`SubmissionBackend`]; the store turns it
/// into a [`FeedbackEntry`] once the backend accepts it.
///
/// [`SubmissionBackend`]: crate::backend::SubmissionBackend
/// [`FeedbackEntry`]: crate::models::FeedbackEntry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFeedback {
    /// Visitor name, placeholder applied
    pub name: String,
    /// Trimmed feedback body
    pub feedback: String,
    /// Rating from 1 to 5, default applied
    pub rating: u8,
    /// Submission timestamp (Unix ms)
    pub timestamp: i64,
}

impl NewFeedback {
    /// Validate a raw submission and apply the defaulting rules.
    ///
    /// The feedback body is trimmed and must be at least
    /// [`MIN_FEEDBACK_CHARS`] characters long; name and rating never fail
    /// validation, they fall back to their defaults instead.
    pub fn from_raw(raw: RawSubmission, timestamp: i64) -> Result<Self> {
        let feedback = raw.feedback.trim();
        if feedback.is_empty() {
            return Err(Error::EmptyFeedback);
        }

        let length = feedback.chars().count();
        if length < MIN_FEEDBACK_CHARS {
            return Err(Error::FeedbackTooShort {
                length,
                minimum: MIN_FEEDBACK_CHARS,
            });
        }

        Ok(Self {
            name: resolve_name(raw.name.as_deref()),
            feedback: feedback.to_string(),
            rating: resolve_rating(raw.rating.as_deref()),
            timestamp,
        })
    }
}

fn resolve_name(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => ANONYMOUS_NAME.to_string(),
    }
}

fn resolve_rating(raw: Option<&str>) -> u8 {
    raw.and_then(|value| value.trim().parse::<u8>().ok())
        .filter(|rating| (1..=MAX_RATING).contains(rating))
        .unwrap_or(DEFAULT_RATING)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw(feedback: &str) -> RawSubmission {
        RawSubmission {
            name: None,
            feedback: feedback.to_string(),
            rating: None,
        }
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let candidate = NewFeedback::from_raw(raw("  a solid portfolio page  "), 42).unwrap();

        assert_eq!(candidate.feedback, "a solid portfolio page");
        assert_eq!(candidate.name, ANONYMOUS_NAME);
        assert_eq!(candidate.rating, DEFAULT_RATING);
        assert_eq!(candidate.timestamp, 42);
    }

    #[test]
    fn test_empty_feedback_rejected() {
        let error = NewFeedback::from_raw(raw("   \n\t "), 0).unwrap_err();
        assert!(matches!(error, Error::EmptyFeedback));
    }

    #[test]
    fn test_short_feedback_rejected_at_boundary() {
        // 9 characters fails, 10 passes
        let error = NewFeedback::from_raw(raw("only nine"), 0).unwrap_err();
        assert!(matches!(
            error,
            Error::FeedbackTooShort {
                length: 9,
                minimum: MIN_FEEDBACK_CHARS
            }
        ));

        let candidate = NewFeedback::from_raw(raw("exactly 10"), 0).unwrap();
        assert_eq!(candidate.feedback.chars().count(), 10);
    }

    #[test]
    fn test_length_counted_after_trimming() {
        // Padding must not rescue a short body
        let error = NewFeedback::from_raw(raw("   short    "), 0).unwrap_err();
        assert!(matches!(error, Error::FeedbackTooShort { length: 5, .. }));
    }

    #[test]
    fn test_name_defaulting() {
        let mut input = raw("a perfectly valid feedback");
        input.name = Some("  Ana  ".to_string());
        assert_eq!(NewFeedback::from_raw(input, 0).unwrap().name, "Ana");

        let mut blank = raw("a perfectly valid feedback");
        blank.name = Some("   ".to_string());
        assert_eq!(
            NewFeedback::from_raw(blank, 0).unwrap().name,
            ANONYMOUS_NAME
        );
    }

    #[test]
    fn test_rating_defaulting() {
        assert_eq!(resolve_rating(None), 5);
        assert_eq!(resolve_rating(Some("not a number")), 5);
        assert_eq!(resolve_rating(Some("")), 5);
        assert_eq!(resolve_rating(Some("0")), 5);
        assert_eq!(resolve_rating(Some("7")), 5);
        assert_eq!(resolve_rating(Some("-3")), 5);
        assert_eq!(resolve_rating(Some("3")), 3);
        assert_eq!(resolve_rating(Some(" 1 ")), 1);
        assert_eq!(resolve_rating(Some("5")), 5);
    }
}
