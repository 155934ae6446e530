//! Tracking entries — the immutable units of a case file's history.
//!
//! An entry is never mutated or removed once created; a history only ever
//! grows by prepending.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One timestamped note in a case file's history. Notes are either typed by
/// the user or generated by a lifecycle operation (audit entries).
///
/// Serde renames keep the persisted JSON keys of the original deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEntry {
  #[serde(rename = "id")]
  pub entry_id:    Uuid,
  /// Creation instant; rendered in the fixed display format only at
  /// projection time.
  #[serde(rename = "date")]
  pub recorded_at: DateTime<Utc>,
  pub note:        String,
}

impl TrackingEntry {
  /// Build an entry for `note`, stamped now.
  pub fn now(note: impl Into<String>) -> Self {
    Self {
      entry_id:    Uuid::new_v4(),
      recorded_at: Utc::now(),
      note:        note.into(),
    }
  }
}
