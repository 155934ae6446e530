//! Report projections — pure read-side views handed to the export layer.
//!
//! Projections never mutate and carry pre-formatted display strings, so the
//! export layer needs no knowledge of the model.

use crate::{
  case_file::CaseFile,
  locale::{format_date, format_instant},
};

// ─── Fixed headings ──────────────────────────────────────────────────────────

pub const REPORT_TITLE: &str = "Informe de Expediente";
pub const SUMMARY_TITLE: &str = "Listado de Expedientes";
pub const PROGRAM_NAME: &str =
  "Programa N° 77 \"Red de Leche Humana de la Provincia del Neuquén\"";

// ─── Single-file report ──────────────────────────────────────────────────────

/// One history entry, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
  pub recorded_at: String,
  pub note:        String,
}

/// The detail report for one case file.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
  pub name:       String,
  pub status:     String,
  pub created_on: String,
  /// Stored order: newest first.
  pub entries:    Vec<ReportEntry>,
}

/// Project one case file into its detail report.
pub fn case_report(file: &CaseFile) -> CaseReport {
  CaseReport {
    name:       file.name.clone(),
    status:     file.status.label().to_string(),
    created_on: format_date(file.created_on),
    entries:    file
      .history
      .iter()
      .map(|e| ReportEntry {
        recorded_at: format_instant(e.recorded_at),
        note:        e.note.clone(),
      })
      .collect(),
  }
}

// ─── Summary report ──────────────────────────────────────────────────────────

/// One row of the whole-collection summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
  pub name:       String,
  pub created_on: String,
  pub status:     String,
}

/// The tabular summary of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
  /// Collection order: newest-created first. No sorting, no filtering.
  pub rows: Vec<SummaryRow>,
}

/// Project the collection into its summary report.
pub fn summary_report(files: &[CaseFile]) -> SummaryReport {
  SummaryReport {
    rows: files
      .iter()
      .map(|f| SummaryRow {
        name:       f.name.clone(),
        created_on: format_date(f.created_on),
        status:     f.status.label().to_string(),
      })
      .collect(),
  }
}
