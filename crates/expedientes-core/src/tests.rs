//! Unit tests for the model, the lifecycle operations, and the report
//! projections.

use chrono::NaiveDate;

use crate::{
  Error,
  case_file::{CaseFile, CaseStatus, NewCaseFile},
  lifecycle::{self, IdentityEdit},
  report::{case_report, summary_report},
  store::{decode_collection, encode_collection},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_file(name: &str) -> CaseFile {
  lifecycle::create(NewCaseFile {
    name:        name.to_string(),
    description: "Pedido de insumos".to_string(),
    created_on:  date(2024, 1, 10),
  })
  .unwrap()
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[test]
fn create_seeds_one_entry_in_progress() {
  let file = new_file("Exp. 2024-12345-NQN");
  assert_eq!(file.status, CaseStatus::InProgress);
  assert_eq!(file.history.len(), 1);
  assert!(file.history[0].note.contains("creada"));
}

#[test]
fn create_assigns_distinct_ids() {
  let a = new_file("Exp-1");
  let b = new_file("Exp-1");
  assert_ne!(a.file_id, b.file_id);
}

#[test]
fn create_trims_stored_fields() {
  let file = lifecycle::create(NewCaseFile {
    name:        "  Exp-1  ".to_string(),
    description: " d ".to_string(),
    created_on:  date(2024, 1, 10),
  })
  .unwrap();
  assert_eq!(file.name, "Exp-1");
  assert_eq!(file.description, "d");
}

#[test]
fn create_rejects_blank_name() {
  let err = lifecycle::create(NewCaseFile {
    name:        "   ".to_string(),
    description: "d".to_string(),
    created_on:  date(2024, 1, 10),
  })
  .unwrap_err();
  assert!(matches!(err, Error::EmptyField("name")));
}

#[test]
fn create_rejects_blank_description() {
  let err = lifecycle::create(NewCaseFile {
    name:        "Exp-1".to_string(),
    description: "\n".to_string(),
    created_on:  date(2024, 1, 10),
  })
  .unwrap_err();
  assert!(matches!(err, Error::EmptyField("description")));
}

// ─── Append note ─────────────────────────────────────────────────────────────

#[test]
fn append_note_prepends_one_entry() {
  let file = new_file("Exp-1");
  let updated = lifecycle::append_note(&file, "Elevado a dirección.").unwrap();
  assert_eq!(updated.history.len(), file.history.len() + 1);
  assert_eq!(updated.latest_entry().unwrap().note, "Elevado a dirección.");
}

#[test]
fn append_note_trims_text() {
  let file = new_file("Exp-1");
  let updated = lifecycle::append_note(&file, "  En mesa de entradas. ").unwrap();
  assert_eq!(updated.history[0].note, "En mesa de entradas.");
}

#[test]
fn append_note_rejects_whitespace_only() {
  let file = new_file("Exp-1");
  let err = lifecycle::append_note(&file, "  \n ").unwrap_err();
  assert!(matches!(err, Error::EmptyField("note")));
}

// ─── Toggle status ───────────────────────────────────────────────────────────

#[test]
fn toggle_flips_and_records_transition() {
  let file = new_file("Exp-1");
  let once = lifecycle::toggle_status(&file);
  assert_eq!(once.status, CaseStatus::Resolved);
  assert_eq!(once.history[0].note, lifecycle::NOTE_RESOLVED);
}

#[test]
fn toggle_twice_restores_status_but_grows_history() {
  let file = new_file("Exp-1");
  let twice = lifecycle::toggle_status(&lifecycle::toggle_status(&file));
  assert_eq!(twice.status, file.status);
  assert_eq!(twice.history[0].note, lifecycle::NOTE_REOPENED);
  assert_eq!(twice.history.len(), file.history.len() + 2);
}

// ─── Edit identifying fields ─────────────────────────────────────────────────

fn unchanged_edit(file: &CaseFile) -> IdentityEdit {
  IdentityEdit {
    name:        file.name.clone(),
    created_on:  file.created_on,
    description: None,
  }
}

#[test]
fn edit_with_identical_values_adds_no_entry() {
  let file = new_file("Exp-1");
  let updated = lifecycle::edit_identity(&file, &unchanged_edit(&file)).unwrap();
  assert_eq!(updated.history, file.history);
  assert_eq!(updated, file);
}

#[test]
fn edit_name_records_old_and_new() {
  let file = new_file("Exp-1");
  let mut edit = unchanged_edit(&file);
  edit.name = "Exp-1-B".to_string();
  let updated = lifecycle::edit_identity(&file, &edit).unwrap();

  assert_eq!(updated.name, "Exp-1-B");
  assert_eq!(updated.history.len(), file.history.len() + 1);
  let note = &updated.history[0].note;
  assert!(note.contains("Exp-1") && note.contains("Exp-1-B"), "note: {note}");
  assert!(!note.contains("Fecha"), "unexpected date clause: {note}");
}

#[test]
fn edit_date_records_both_formatted_dates() {
  let file = new_file("Exp-1");
  let mut edit = unchanged_edit(&file);
  edit.created_on = date(2024, 1, 11);
  let updated = lifecycle::edit_identity(&file, &edit).unwrap();

  assert_eq!(updated.created_on, date(2024, 1, 11));
  let note = &updated.history[0].note;
  assert!(note.contains("10/01/2024") && note.contains("11/01/2024"), "note: {note}");
  assert!(!note.contains("Nombre"), "unexpected name clause: {note}");
}

#[test]
fn edit_name_and_date_produces_single_combined_entry() {
  let file = new_file("Exp-1");
  let edit = IdentityEdit {
    name:        "Exp-2".to_string(),
    created_on:  date(2024, 2, 1),
    description: None,
  };
  let updated = lifecycle::edit_identity(&file, &edit).unwrap();

  assert_eq!(updated.history.len(), file.history.len() + 1);
  let note = &updated.history[0].note;
  assert!(note.contains("Nombre") && note.contains("Fecha"), "note: {note}");
}

#[test]
fn edit_description_records_audit_clause() {
  let file = new_file("Exp-1");
  let mut edit = unchanged_edit(&file);
  edit.description = Some("Pedido ampliado de insumos".to_string());
  let updated = lifecycle::edit_identity(&file, &edit).unwrap();

  assert_eq!(updated.description, "Pedido ampliado de insumos");
  assert_eq!(updated.history.len(), file.history.len() + 1);
  assert!(updated.history[0].note.contains("Descripción"));
}

#[test]
fn edit_with_same_description_adds_no_entry() {
  let file = new_file("Exp-1");
  let mut edit = unchanged_edit(&file);
  edit.description = Some(file.description.clone());
  let updated = lifecycle::edit_identity(&file, &edit).unwrap();
  assert_eq!(updated.history, file.history);
}

#[test]
fn edit_rejects_blank_name() {
  let file = new_file("Exp-1");
  let mut edit = unchanged_edit(&file);
  edit.name = " ".to_string();
  let err = lifecycle::edit_identity(&file, &edit).unwrap_err();
  assert!(matches!(err, Error::EmptyField("name")));
}

// ─── Wire format ─────────────────────────────────────────────────────────────

#[test]
fn collection_round_trips_element_wise() {
  let a = lifecycle::toggle_status(&new_file("Exp-1"));
  let b = lifecycle::append_note(&new_file("Exp-2"), "En mesa de entradas.").unwrap();
  let files = vec![b, a];

  let encoded = encode_collection(&files).unwrap();
  let decoded = decode_collection(&encoded).unwrap();
  assert_eq!(decoded, files);
}

#[test]
fn status_persists_original_display_strings() {
  let file = new_file("Exp-1");
  let encoded = encode_collection(std::slice::from_ref(&file)).unwrap();
  assert!(encoded.contains("\"En ejecución\""), "encoded: {encoded}");

  let resolved = lifecycle::toggle_status(&file);
  let encoded = encode_collection(&[resolved]).unwrap();
  assert!(encoded.contains("\"Ya Resuelto\""), "encoded: {encoded}");
}

#[test]
fn record_without_description_still_loads() {
  // Shape written by the first revision of the original deployment.
  let raw = r#"[{
    "id": "7a4c6f0e-3b2d-4d51-9a8e-5f0c1b2d3e4f",
    "name": "Exp-1",
    "creationDate": "2024-01-10",
    "status": "En ejecución",
    "trackingHistory": [{
      "id": "0d9e8f7a-6b5c-4d3e-2f1a-0b9c8d7e6f5a",
      "date": "2024-01-10T12:00:00Z",
      "note": "Ficha de seguimiento creada."
    }]
  }]"#;
  let files = decode_collection(raw).unwrap();
  assert_eq!(files.len(), 1);
  assert_eq!(files[0].description, "");
  assert_eq!(files[0].status, CaseStatus::InProgress);
}

#[test]
fn malformed_document_fails_to_decode() {
  assert!(decode_collection("not json").is_err());
  assert!(decode_collection("{\"files\":[]}").is_err());
}

// ─── Report projections ──────────────────────────────────────────────────────

#[test]
fn case_report_preserves_newest_first_order() {
  let file = lifecycle::append_note(&new_file("Exp-1"), "Nota nueva.").unwrap();
  let report = case_report(&file);

  assert_eq!(report.name, "Exp-1");
  assert_eq!(report.status, "En ejecución");
  assert_eq!(report.created_on, "10/01/2024");
  assert_eq!(report.entries.len(), 2);
  assert_eq!(report.entries[0].note, "Nota nueva.");
}

#[test]
fn summary_report_preserves_collection_order() {
  let files = vec![new_file("Exp-2"), new_file("Exp-1")];
  let report = summary_report(&files);

  assert_eq!(report.rows.len(), 2);
  assert_eq!(report.rows[0].name, "Exp-2");
  assert_eq!(report.rows[1].name, "Exp-1");
  assert!(report.rows.iter().all(|r| r.status == "En ejecución"));
  assert!(report.rows.iter().all(|r| r.created_on == "10/01/2024"));
}
