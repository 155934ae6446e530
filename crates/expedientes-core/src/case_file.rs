//! Case file — the aggregate root: identity, descriptive fields, status,
//! and the ordered tracking history (newest first).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tracking::TrackingEntry;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Processing state of a case file. Binary; transitions are symmetric.
///
/// Serde names match the strings the original deployment persisted, so an
/// existing collection loads unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
  #[serde(rename = "En ejecución")]
  InProgress,
  #[serde(rename = "Ya Resuelto")]
  Resolved,
}

impl CaseStatus {
  /// The other state.
  pub fn toggled(self) -> Self {
    match self {
      Self::InProgress => Self::Resolved,
      Self::Resolved   => Self::InProgress,
    }
  }

  /// Display label; also the persisted string.
  pub fn label(self) -> &'static str {
    match self {
      Self::InProgress => "En ejecución",
      Self::Resolved   => "Ya Resuelto",
    }
  }
}

impl std::fmt::Display for CaseStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Case file ───────────────────────────────────────────────────────────────

/// The tracked administrative record.
///
/// Field renames keep the persisted JSON shape of the original deployment.
/// `description` defaults to empty so records written before the field
/// existed still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
  #[serde(rename = "id")]
  pub file_id:     Uuid,
  pub name:        String,
  #[serde(default)]
  pub description: String,
  /// Calendar date only; no time component.
  #[serde(rename = "creationDate")]
  pub created_on:  NaiveDate,
  pub status:      CaseStatus,
  /// Newest first; new entries are prepended. Holds at least the creation
  /// entry for the lifetime of the record.
  #[serde(rename = "trackingHistory")]
  pub history:     Vec<TrackingEntry>,
}

impl CaseFile {
  /// The most recent tracking entry.
  pub fn latest_entry(&self) -> Option<&TrackingEntry> {
    self.history.first()
  }
}

// ─── Creation input ──────────────────────────────────────────────────────────

/// Input to [`crate::lifecycle::create`].
#[derive(Debug, Clone)]
pub struct NewCaseFile {
  pub name:        String,
  pub description: String,
  pub created_on:  NaiveDate,
}
