//! Command handlers: resolve the target, apply the lifecycle operation,
//! report in the user's language.

use std::{
  io::{self, BufRead as _, Write as _},
  path::Path,
};

use anyhow::{Context as _, bail};
use chrono::{NaiveDate, Utc};
use expedientes_core::{
  case_file::{CaseFile, CaseStatus, NewCaseFile},
  lifecycle::{self, IdentityEdit},
  report::{case_report, summary_report},
  store::CaseFileStore,
};
use expedientes_export::{Exporter, FileSink};
use expedientes_store_sqlite::SqliteKv;
use uuid::Uuid;

type Store = CaseFileStore<SqliteKv>;

// ─── Target resolution ────────────────────────────────────────────────────────

/// Resolve `selector` to a case file: a UUID, or an exact name. Ambiguous
/// names must be disambiguated by id.
fn resolve<'a>(store: &'a Store, selector: &str) -> anyhow::Result<&'a CaseFile> {
  if let Ok(id) = selector.parse::<Uuid>() {
    return store
      .find(id)
      .with_context(|| format!("no se encontró el expediente {id}"));
  }

  let matches: Vec<&CaseFile> =
    store.files().iter().filter(|f| f.name == selector).collect();
  match matches.as_slice() {
    [] => bail!("no se encontró el expediente \"{selector}\""),
    [one] => Ok(one),
    _ => bail!(
      "hay {} expedientes llamados \"{selector}\"; use el id",
      matches.len()
    ),
  }
}

// ─── Mutating commands ────────────────────────────────────────────────────────

pub async fn create(
  store: &mut Store,
  name: String,
  description: String,
  date: Option<NaiveDate>,
) -> anyhow::Result<()> {
  let created_on = date.unwrap_or_else(|| Utc::now().date_naive());
  let file = lifecycle::create(NewCaseFile { name, description, created_on })?;
  println!("Expediente \"{}\" registrado ({}).", file.name, file.file_id);
  store.insert(file).await;
  Ok(())
}

pub async fn note(store: &mut Store, selector: &str, text: &str) -> anyhow::Result<()> {
  let file = resolve(store, selector)?;
  // The original UI only offers the note form while the file is in
  // progress; the gate lives here, not in the lifecycle operation.
  if file.status == CaseStatus::Resolved {
    bail!("el expediente ya está resuelto; reábralo para agregar seguimiento");
  }
  let updated = lifecycle::append_note(file, text)?;
  store.replace(updated).await;
  println!("Seguimiento agregado.");
  Ok(())
}

pub async fn toggle(store: &mut Store, selector: &str) -> anyhow::Result<()> {
  let updated = lifecycle::toggle_status(resolve(store, selector)?);
  let status = updated.status;
  store.replace(updated).await;
  match status {
    CaseStatus::Resolved => println!("Expediente marcado como resuelto."),
    CaseStatus::InProgress => println!("Expediente reabierto."),
  }
  Ok(())
}

pub async fn edit(
  store: &mut Store,
  selector: &str,
  name: Option<String>,
  date: Option<NaiveDate>,
  description: Option<String>,
) -> anyhow::Result<()> {
  let current = resolve(store, selector)?;
  let edit = IdentityEdit {
    name: name.unwrap_or_else(|| current.name.clone()),
    created_on: date.unwrap_or(current.created_on),
    description,
  };
  let updated = lifecycle::edit_identity(current, &edit)?;
  let changed = updated.history.len() > current.history.len();
  store.replace(updated).await;

  if changed {
    println!("Expediente actualizado.");
  } else {
    println!("Sin cambios.");
  }
  Ok(())
}

pub async fn delete(store: &mut Store, selector: &str, yes: bool) -> anyhow::Result<()> {
  let file = resolve(store, selector)?;
  let id = file.file_id;
  let name = file.name.clone();

  if !yes && !confirm_delete()? {
    println!("Operación cancelada.");
    return Ok(());
  }

  store.remove(id).await;
  println!("Expediente \"{name}\" eliminado.");
  Ok(())
}

/// Ask for the irreversible-action acknowledgment on stdin.
fn confirm_delete() -> anyhow::Result<bool> {
  print!(
    "¿Está seguro de que desea eliminar este expediente? \
     Esta acción no se puede deshacer. [s/N] "
  );
  io::stdout().flush().ok();

  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  let answer = line.trim().to_lowercase();
  Ok(answer == "s" || answer == "si" || answer == "sí")
}

// ─── Read-only commands ───────────────────────────────────────────────────────

pub fn list(store: &Store) -> anyhow::Result<()> {
  if store.files().is_empty() {
    println!("No hay expedientes registrados.");
    return Ok(());
  }

  let report = summary_report(store.files());
  let name_w = report
    .rows
    .iter()
    .map(|r| r.name.chars().count())
    .chain(["Nombre".len()])
    .max()
    .unwrap_or(0);

  println!("{:<name_w$}  {:<10}  {}", "Nombre", "Fecha", "Estado");
  for (row, file) in report.rows.iter().zip(store.files()) {
    println!(
      "{:<name_w$}  {:<10}  {:<12}  {}",
      row.name, row.created_on, row.status, file.file_id
    );
  }
  Ok(())
}

pub fn show(store: &Store, selector: &str) -> anyhow::Result<()> {
  let file = resolve(store, selector)?;
  let report = case_report(file);

  println!("{}", report.name);
  println!("Creado el: {}", report.created_on);
  println!("Estado: {}", report.status);
  if !file.description.is_empty() {
    println!("Descripción: {}", file.description);
  }
  println!();
  println!("Historial de Seguimiento");
  for entry in &report.entries {
    println!("  {}", entry.recorded_at);
    println!("  {}", entry.note);
    println!();
  }
  Ok(())
}

// ─── Export commands ──────────────────────────────────────────────────────────

pub async fn export(store: &Store, selector: &str, export_dir: &Path) -> anyhow::Result<()> {
  let file = resolve(store, selector)?;
  let exporter = Exporter::new(FileSink::new(export_dir));
  let filename = exporter
    .export_case(&case_report(file))
    .await
    .context("no se pudo exportar el informe")?;
  println!("Informe exportado: {}", export_dir.join(filename).display());
  Ok(())
}

pub async fn export_summary(store: &Store, export_dir: &Path) -> anyhow::Result<()> {
  let exporter = Exporter::new(FileSink::new(export_dir));
  let filename = exporter
    .export_summary(&summary_report(store.files()))
    .await
    .context("no se pudo exportar el listado")?;
  println!("Listado exportado: {}", export_dir.join(filename).display());
  Ok(())
}
