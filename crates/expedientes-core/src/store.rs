//! The `KeyValue` persistence contract and the in-memory case-file store.
//!
//! The trait is implemented by storage backends (e.g.
//! `expedientes-store-sqlite`). The store is the collection's single
//! writer: every mutation replaces the in-memory value and writes the whole
//! serialized collection back through the backend.

use std::future::Future;

use uuid::Uuid;

use crate::{Result, case_file::CaseFile};

// ─── Persistence contract ────────────────────────────────────────────────────

/// The fixed key the whole collection is stored under.
pub const STORAGE_KEY: &str = "files";

/// Abstraction over a key/value persistence backend.
///
/// All methods return `Send` futures so the trait can be used from a
/// multi-threaded async runtime.
pub trait KeyValue: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the value stored under `key`. `None` if absent.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Write `value` under `key`, replacing any previous value.
  fn set<'a>(
    &'a self,
    key: &'a str,
    value: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Owns the authoritative case-file collection and keeps it synchronized
/// with persistent storage.
///
/// In-memory state is the source of truth for the running session;
/// durability is best-effort. Backend failures are absorbed and reported
/// only through `tracing`.
pub struct CaseFileStore<K: KeyValue> {
  backend: K,
  files:   Vec<CaseFile>,
}

impl<K: KeyValue> CaseFileStore<K> {
  /// Load the persisted collection through `backend`.
  ///
  /// Absent or malformed data yields an empty collection; neither raises.
  pub async fn load(backend: K) -> Self {
    let files = match backend.get(STORAGE_KEY).await {
      Ok(Some(raw)) => match decode_collection(&raw) {
        Ok(files) => files,
        Err(e) => {
          tracing::warn!("stored collection is malformed, starting empty: {e}");
          Vec::new()
        }
      },
      Ok(None) => Vec::new(),
      Err(e) => {
        tracing::warn!("failed to read stored collection, starting empty: {e}");
        Vec::new()
      }
    };
    Self { backend, files }
  }

  /// The collection, newest-created first.
  pub fn files(&self) -> &[CaseFile] {
    &self.files
  }

  /// Look up a case file by id.
  pub fn find(&self, id: Uuid) -> Option<&CaseFile> {
    self.files.iter().find(|f| f.file_id == id)
  }

  /// Prepend `file` and persist. The caller guarantees a fresh id.
  pub async fn insert(&mut self, file: CaseFile) {
    self.files.insert(0, file);
    self.persist().await;
  }

  /// Replace the element whose id matches `updated`, preserving its
  /// position. Returns whether a replacement happened; without a match the
  /// collection and storage are left untouched.
  pub async fn replace(&mut self, updated: CaseFile) -> bool {
    let Some(slot) = self.files.iter_mut().find(|f| f.file_id == updated.file_id)
    else {
      return false;
    };
    *slot = updated;
    self.persist().await;
    true
  }

  /// Remove the element with `id`. Returns whether it was present.
  /// Confirmation of this irreversible action is the caller's concern.
  pub async fn remove(&mut self, id: Uuid) -> bool {
    let before = self.files.len();
    self.files.retain(|f| f.file_id != id);
    if self.files.len() == before {
      return false;
    }
    self.persist().await;
    true
  }

  /// Write-through of the whole collection. A failure is logged and the
  /// in-memory collection stays authoritative.
  async fn persist(&self) {
    let encoded = match encode_collection(&self.files) {
      Ok(s) => s,
      Err(e) => {
        tracing::warn!("failed to serialize collection: {e}");
        return;
      }
    };
    if let Err(e) = self.backend.set(STORAGE_KEY, &encoded).await {
      tracing::warn!("failed to persist collection: {e}");
    }
  }
}

// ─── Wire format ─────────────────────────────────────────────────────────────

/// Serialize a collection to the stored JSON document.
pub fn encode_collection(files: &[CaseFile]) -> Result<String> {
  Ok(serde_json::to_string(files)?)
}

/// Parse a stored JSON document into a collection.
pub fn decode_collection(raw: &str) -> Result<Vec<CaseFile>> {
  Ok(serde_json::from_str(raw)?)
}
