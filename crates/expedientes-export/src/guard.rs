//! Single-flight guard for export operations.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{Error, Result};

/// A boolean in-flight flag for one export target.
///
/// A second export against the same guard while one is pending is refused;
/// the flag is cleared when the ticket drops, whatever the outcome.
#[derive(Debug, Default)]
pub struct ExportGuard {
  in_flight: AtomicBool,
}

impl ExportGuard {
  pub fn new() -> Self {
    Self::default()
  }

  /// Claim the guard for one export. Fails with [`Error::ExportInProgress`]
  /// if an export is already pending.
  pub fn begin(&self) -> Result<ExportTicket<'_>> {
    if self.in_flight.swap(true, Ordering::AcqRel) {
      return Err(Error::ExportInProgress);
    }
    Ok(ExportTicket { guard: self })
  }

  pub fn is_in_flight(&self) -> bool {
    self.in_flight.load(Ordering::Acquire)
  }
}

/// Clears the guard on drop — including on failure paths.
pub struct ExportTicket<'a> {
  guard: &'a ExportGuard,
}

impl Drop for ExportTicket<'_> {
  fn drop(&mut self) {
    self.guard.in_flight.store(false, Ordering::Release);
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
