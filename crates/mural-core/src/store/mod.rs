//! The feedback store
//!
//! Owns the in-memory entry list and its persisted mirror. The store is the
//! sole writer of its slot; display order is computed at render time and
//! never changes storage order. Two processes sharing one slot race with
//! last-writer-wins semantics.

use std::cmp::Reverse;

use crate::backend::SubmissionBackend;
use crate::error::{Error, Result};
use crate::models::{EntryId, FeedbackEntry, NewFeedback, RawSubmission};
use crate::notice::{Notice, NoticeBoard, NoticeKind};
use crate::storage::StorageSlot;

/// Success notice shown after a persisted submission.
pub const SUBMITTED_NOTICE: &str = "Feedback submitted, thank you!";

/// Store owning the feedback list and its persisted mirror.
pub struct FeedbackStore {
    slot: Box<dyn StorageSlot>,
    entries: Vec<FeedbackEntry>,
    notices: NoticeBoard,
    submitting: bool,
}

impl FeedbackStore {
    /// Load the store from its slot.
    ///
    /// A never-written slot seeds the two demo entries. A corrupt payload
    /// is logged and treated as empty; the slot itself is left untouched
    /// until the next mutation overwrites it.
    pub fn load(slot: Box<dyn StorageSlot>) -> Result<Self> {
        let entries = match slot.read()? {
            None => demo_entries(),
            Some(payload) => match decode_entries(&payload) {
                Ok(entries) => entries,
                Err(error) => {
                    tracing::warn!(%error, "ignoring corrupt feedback slot");
                    Vec::new()
                }
            },
        };

        Ok(Self {
            slot,
            entries,
            notices: NoticeBoard::new(),
            submitting: false,
        })
    }

    /// Entries in storage order (newest submissions are prepended).
    #[must_use]
    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    /// Entries in display order: timestamp descending.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<FeedbackEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by_key(|entry| Reverse(entry.timestamp));
        entries
    }

    /// Whether a submission is currently awaiting its backend call.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The currently visible notice, if any.
    #[must_use]
    pub fn current_notice(&self, now_ms: i64) -> Option<&Notice> {
        self.notices.current(now_ms)
    }

    /// Validate a submission and deliver it through `backend`.
    ///
    /// The entry is persisted only after the backend accepts it; on any
    /// failure the store is left unchanged, an error notice is posted, and
    /// the error is returned. A success notice is posted once the entry is
    /// stored. Further submissions are rejected while the backend call is
    /// pending.
    pub async fn submit<B: SubmissionBackend>(
        &mut self,
        raw: RawSubmission,
        backend: &B,
    ) -> Result<FeedbackEntry> {
        if self.submitting {
            return Err(Error::SubmissionInProgress);
        }

        let now_ms = unix_timestamp_millis();
        let candidate = match NewFeedback::from_raw(raw, now_ms) {
            Ok(candidate) => candidate,
            Err(error) => {
                self.notices.post(NoticeKind::Error, error.to_string(), now_ms);
                return Err(error);
            }
        };

        self.submitting = true;
        let delivery = backend.submit(&candidate).await;
        self.submitting = false;

        if let Err(error) = delivery {
            self.notices.post(NoticeKind::Error, error.to_string(), now_ms);
            return Err(error);
        }

        let entry = FeedbackEntry {
            id: self.unique_id(candidate.timestamp),
            name: candidate.name,
            feedback: candidate.feedback,
            rating: candidate.rating,
            timestamp: candidate.timestamp,
        };

        self.entries.insert(0, entry.clone());
        self.persist()?;
        self.notices.post(NoticeKind::Success, SUBMITTED_NOTICE, now_ms);
        tracing::info!(id = %entry.id, "feedback stored");
        Ok(entry)
    }

    /// Remove the entry with the given id and persist.
    ///
    /// Returns `false` when no entry matches; the collection is untouched
    /// and the miss is logged rather than raised.
    pub fn delete_by_id(&mut self, id: EntryId) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);

        if self.entries.len() == before {
            tracing::warn!(%id, "no feedback entry to delete");
            return Ok(false);
        }

        self.persist()?;
        tracing::info!(%id, "feedback entry deleted");
        Ok(true)
    }

    /// Remove every entry, leaving an initialized-but-empty slot behind.
    ///
    /// Demo seeding only applies to a never-written slot, so a later load
    /// yields the empty list rather than the seed.
    pub fn delete_all(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()?;
        tracing::info!("all feedback entries deleted");
        Ok(())
    }

    // Ids are creation timestamps; bump while colliding so the collection
    // stays unique by id even for same-millisecond submissions.
    fn unique_id(&self, start: i64) -> EntryId {
        let mut candidate = start;
        while self
            .entries
            .iter()
            .any(|entry| entry.id.as_i64() == candidate)
        {
            candidate += 1;
        }
        EntryId::new(candidate)
    }

    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.entries)?;
        self.slot.write(&payload)
    }
}

/// Decode a slot payload strictly.
pub fn decode_entries(payload: &str) -> Result<Vec<FeedbackEntry>> {
    serde_json::from_str(payload).map_err(|error| Error::StorageCorrupt(error.to_string()))
}

/// The two demo entries used to seed a never-initialized store.
#[must_use]
pub fn demo_entries() -> Vec<FeedbackEntry> {
    vec![
        FeedbackEntry {
            id: EntryId::new(1),
            name: "Satisfied Client".to_string(),
            feedback: "Excellent work! The system exceeded our expectations.".to_string(),
            rating: 5,
            timestamp: 1_705_276_800_000, // 2024-01-15 UTC
        },
        FeedbackEntry {
            id: EntryId::new(2),
            name: "Project Partner".to_string(),
            feedback: "A very skilled and dedicated professional. Highly recommended!".to_string(),
            rating: 5,
            timestamp: 1_706_745_600_000, // 2024-02-01 UTC
        },
    ]
}

/// Current Unix timestamp in milliseconds.
#[must_use]
pub fn unix_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
