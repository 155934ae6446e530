//! Lifecycle operations — the business-rule transitions applied to a case
//! file.
//!
//! Each operation is a pure function returning a new value; the store swaps
//! it in by id. Every transition that changes observable state records
//! exactly one system-generated history entry, timestamped at the moment of
//! the change.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
  Error, Result,
  case_file::{CaseFile, CaseStatus, NewCaseFile},
  locale::format_date,
  tracking::TrackingEntry,
};

// ─── System note texts ───────────────────────────────────────────────────────

/// Seed note of a freshly created file.
pub const NOTE_CREATED: &str = "Ficha de seguimiento creada.";
/// Audit note when a file is marked resolved.
pub const NOTE_RESOLVED: &str = "Expediente marcado como resuelto.";
/// Audit note when a resolved file is reopened.
pub const NOTE_REOPENED: &str = "Expediente reabierto.";

// ─── Create ──────────────────────────────────────────────────────────────────

/// Create a case file from `input`.
///
/// `name` and `description` must be non-empty after trimming. The new file
/// starts [`CaseStatus::InProgress`] with exactly one system-generated
/// history entry.
pub fn create(input: NewCaseFile) -> Result<CaseFile> {
  let name = non_empty(&input.name, "name")?;
  let description = non_empty(&input.description, "description")?;

  Ok(CaseFile {
    file_id: Uuid::new_v4(),
    name,
    description,
    created_on: input.created_on,
    status: CaseStatus::InProgress,
    history: vec![TrackingEntry::now(NOTE_CREATED)],
  })
}

// ─── Append note ─────────────────────────────────────────────────────────────

/// Prepend a user-authored tracking note.
///
/// Whether notes are accepted while the file is resolved is a presentation
/// concern; the operation itself only rejects empty text.
pub fn append_note(file: &CaseFile, note: &str) -> Result<CaseFile> {
  let note = non_empty(note, "note")?;
  let mut updated = file.clone();
  updated.history.insert(0, TrackingEntry::now(note));
  Ok(updated)
}

// ─── Toggle status ───────────────────────────────────────────────────────────

/// Flip the status and record the transition. Always succeeds.
pub fn toggle_status(file: &CaseFile) -> CaseFile {
  let status = file.status.toggled();
  let note = match status {
    CaseStatus::Resolved   => NOTE_RESOLVED,
    CaseStatus::InProgress => NOTE_REOPENED,
  };

  let mut updated = file.clone();
  updated.status = status;
  updated.history.insert(0, TrackingEntry::now(note));
  updated
}

// ─── Edit identifying fields ─────────────────────────────────────────────────

/// Candidate values for [`edit_identity`]. `description: None` leaves the
/// current description untouched.
#[derive(Debug, Clone)]
pub struct IdentityEdit {
  pub name:        String,
  pub created_on:  NaiveDate,
  pub description: Option<String>,
}

/// Apply new identifying fields to `file`.
///
/// Each field that actually differs from the current value contributes one
/// human-readable clause; the clauses are joined into a single audit entry.
/// Identical candidates add no entry. The new values are always applied.
pub fn edit_identity(file: &CaseFile, edit: &IdentityEdit) -> Result<CaseFile> {
  let name = non_empty(&edit.name, "name")?;
  let description = match &edit.description {
    Some(d) => Some(non_empty(d, "description")?),
    None    => None,
  };

  let mut clauses: Vec<String> = Vec::new();
  if name != file.name {
    clauses.push(format!("Nombre cambiado de \"{}\" a \"{}\".", file.name, name));
  }
  if edit.created_on != file.created_on {
    clauses.push(format!(
      "Fecha de creación cambiada de {} a {}.",
      format_date(file.created_on),
      format_date(edit.created_on)
    ));
  }
  if let Some(d) = &description
    && *d != file.description
  {
    clauses.push("Descripción actualizada.".to_string());
  }

  let mut updated = file.clone();
  updated.name = name;
  updated.created_on = edit.created_on;
  if let Some(d) = description {
    updated.description = d;
  }
  if !clauses.is_empty() {
    updated.history.insert(0, TrackingEntry::now(clauses.join(" ")));
  }
  Ok(updated)
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Trimmed, non-empty copy of `value`, or [`Error::EmptyField`].
fn non_empty(value: &str, field: &'static str) -> Result<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(Error::EmptyField(field));
  }
  Ok(trimmed.to_string())
}
