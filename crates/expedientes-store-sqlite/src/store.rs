//! [`SqliteKv`] — the SQLite implementation of
//! [`expedientes_core::store::KeyValue`].

use std::path::Path;

use expedientes_core::store::KeyValue;
use rusqlite::OptionalExtension as _;

use crate::{Result, schema::SCHEMA};

/// A key/value store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteKv {
  conn: tokio_rusqlite::Connection,
}

impl SqliteKv {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

impl KeyValue for SqliteKv {
  type Error = crate::Error;

  async fn get(&self, key: &str) -> Result<Option<String>> {
    let key = key.to_owned();
    let value = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT value FROM kv WHERE key = ?1",
              rusqlite::params![key],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(value)
  }

  async fn set(&self, key: &str, value: &str) -> Result<()> {
    let key = key.to_owned();
    let value = value.to_owned();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO kv (key, value) VALUES (?1, ?2)
           ON CONFLICT (key) DO UPDATE SET value = excluded.value",
          rusqlite::params![key, value],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
