//! Rasterize report projections into wrapped text lines.
//!
//! The layout mirrors the printable report region of the original tool:
//! title and program byline, the identifying fields, then the tracking
//! history in stored (newest-first) order.

use expedientes_core::report::{
  CaseReport, PROGRAM_NAME, REPORT_TITLE, SUMMARY_TITLE, SummaryReport,
};

use crate::page::PageFormat;

// ─── Single-file report ──────────────────────────────────────────────────────

/// Render the detail report for one case file.
pub fn render_case(report: &CaseReport, format: &PageFormat) -> Vec<String> {
  let width = format.columns();
  let mut lines: Vec<String> = Vec::new();

  lines.extend(wrap(REPORT_TITLE, width));
  lines.extend(wrap(PROGRAM_NAME, width));
  lines.push(String::new());

  lines.extend(wrap(&format!("Nombre: {}", report.name), width));
  lines.extend(wrap(&format!("Fecha de Creación: {}", report.created_on), width));
  lines.extend(wrap(&format!("Estado Actual: {}", report.status), width));
  lines.push(String::new());

  lines.push("Historial de Seguimiento".to_string());
  lines.push("-".repeat(width));

  for entry in &report.entries {
    lines.push(entry.recorded_at.clone());
    lines.extend(wrap(&entry.note, width));
    lines.push(String::new());
  }

  lines
}

// ─── Summary report ──────────────────────────────────────────────────────────

/// Render the whole-collection summary as a table, in collection order.
pub fn render_summary(report: &SummaryReport, format: &PageFormat) -> Vec<String> {
  let width = format.columns();
  let mut lines: Vec<String> = Vec::new();

  lines.extend(wrap(SUMMARY_TITLE, width));
  lines.extend(wrap(PROGRAM_NAME, width));
  lines.push(String::new());

  if report.rows.is_empty() {
    lines.push("No hay expedientes registrados.".to_string());
    return lines;
  }

  let name_w = report
    .rows
    .iter()
    .map(|r| r.name.chars().count())
    .chain(["Nombre".len()])
    .max()
    .unwrap_or(0);
  let date_w = "Fecha de Creación".chars().count();

  lines.push(format!(
    "{:<name_w$}  {:<date_w$}  {}",
    "Nombre", "Fecha de Creación", "Estado"
  ));
  lines.push("-".repeat(width));
  for row in &report.rows {
    lines.push(format!(
      "{:<name_w$}  {:<date_w$}  {}",
      row.name, row.created_on, row.status
    ));
  }

  lines
}

// ─── Wrapping ────────────────────────────────────────────────────────────────

/// Word-wrap `text` at `width` character cells. Words longer than a line
/// are split at cell boundaries (respecting char boundaries).
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
  let width = width.max(1);
  let mut lines: Vec<String> = Vec::new();
  let mut current = String::new();

  for word in text.split_whitespace() {
    let word_len = word.chars().count();
    let current_len = current.chars().count();

    if !current.is_empty() {
      if current_len + 1 + word_len <= width {
        current.push(' ');
        current.push_str(word);
        continue;
      }
      lines.push(std::mem::take(&mut current));
    }

    if word_len <= width {
      current.push_str(word);
    } else {
      // Hard-split an overlong word; the last piece starts the next line.
      let chars: Vec<char> = word.chars().collect();
      for chunk in chars.chunks(width) {
        let piece: String = chunk.iter().collect();
        if chunk.len() == width {
          lines.push(piece);
        } else {
          current = piece;
        }
      }
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }
  lines
}

// ─── Tests ───────────────────────────────────────────────────────────────────
