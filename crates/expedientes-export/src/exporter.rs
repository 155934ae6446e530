//! The export pipeline: render → paginate → compose → save.

use std::{
  future::Future,
  path::PathBuf,
};

use expedientes_core::report::{CaseReport, SummaryReport};

use crate::{
  Result,
  guard::ExportGuard,
  page::{A4, PageFormat, compose, paginate},
  render::{render_case, render_summary},
};

// ─── Filenames ───────────────────────────────────────────────────────────────

/// Extension emitted by the built-in plain-text composer.
pub const DOCUMENT_EXTENSION: &str = "txt";

/// Fixed filename stem of the whole-collection summary export.
pub const SUMMARY_STEM: &str = "listado-expedientes";

/// Derive the single-file stem from a case-file name: whitespace runs
/// collapse to underscores.
pub fn case_stem(name: &str) -> String {
  let collapsed = name.split_whitespace().collect::<Vec<_>>().join("_");
  format!("expediente-{collapsed}")
}

// ─── Sink ────────────────────────────────────────────────────────────────────

/// Where composed documents end up. Injectable so the pipeline is testable
/// without a filesystem.
pub trait DocumentSink: Send + Sync {
  fn save<'a>(
    &'a self,
    filename: &'a str,
    bytes: &'a [u8],
  ) -> impl Future<Output = std::io::Result<()>> + Send + 'a;
}

/// Writes documents into a directory via `tokio::fs`.
pub struct FileSink {
  dir: PathBuf,
}

impl FileSink {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }
}

impl DocumentSink for FileSink {
  async fn save(&self, filename: &str, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(&self.dir).await?;
    tokio::fs::write(self.dir.join(filename), bytes).await
  }
}

// ─── Exporter ────────────────────────────────────────────────────────────────

/// Runs the export pipeline behind a single-flight guard.
pub struct Exporter<S: DocumentSink> {
  sink:   S,
  guard:  ExportGuard,
  format: PageFormat,
}

impl<S: DocumentSink> Exporter<S> {
  pub fn new(sink: S) -> Self {
    Self {
      sink,
      guard: ExportGuard::new(),
      format: A4,
    }
  }

  /// Export a single-file detail report. Returns the filename written.
  pub async fn export_case(&self, report: &CaseReport) -> Result<String> {
    let filename = format!("{}.{DOCUMENT_EXTENSION}", case_stem(&report.name));
    let lines = render_case(report, &self.format);
    self.export(&filename, &lines).await?;
    Ok(filename)
  }

  /// Export the whole-collection summary under the fixed filename.
  pub async fn export_summary(&self, report: &SummaryReport) -> Result<String> {
    let filename = format!("{SUMMARY_STEM}.{DOCUMENT_EXTENSION}");
    let lines = render_summary(report, &self.format);
    self.export(&filename, &lines).await?;
    Ok(filename)
  }

  async fn export(&self, filename: &str, lines: &[String]) -> Result<()> {
    // The ticket clears the in-flight flag when dropped, also on failure.
    let _ticket = self.guard.begin()?;
    let pages = paginate(lines, &self.format);
    let bytes = compose(&pages, &self.format);
    self.sink.save(filename, &bytes).await?;
    Ok(())
  }

  pub fn guard(&self) -> &ExportGuard {
    &self.guard
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
