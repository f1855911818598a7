//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use agua_core::{date::DateKey, record::Record, store::RecordStore};
use chrono::Utc;
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{RawRecord, encode_date, encode_dt, encode_status},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A record store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
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

  #[cfg(test)]
  pub(crate) fn conn_for_tests(&self) -> &tokio_rusqlite::Connection { &self.conn }

  /// Run a `SELECT data, status ...` query and decode every row.
  async fn query_records(&self, sql: &'static str, params: Vec<String>) -> Result<Vec<Record>> {
    let raws: Vec<RawRecord> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  async fn read_by_date(&self, date: DateKey) -> Result<Option<Record>> {
    let data = encode_date(date);

    let raw: Option<RawRecord> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT data, status FROM ciclo_agua WHERE data = ?1",
              rusqlite::params![data],
              RawRecord::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn read_range(&self, start: DateKey, end: DateKey) -> Result<Vec<Record>> {
    self
      .query_records(
        "SELECT data, status FROM ciclo_agua
         WHERE data >= ?1 AND data <= ?2
         ORDER BY data ASC",
        vec![encode_date(start), encode_date(end)],
      )
      .await
  }

  async fn read_latest(&self) -> Result<Option<Record>> {
    Ok(self.read_recent(1).await?.into_iter().next())
  }

  async fn read_recent(&self, limit: usize) -> Result<Vec<Record>> {
    let limit = i64::try_from(limit).map_err(|_| Error::Limit(limit))?;

    let raws: Vec<RawRecord> = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare("SELECT data, status FROM ciclo_agua ORDER BY data DESC LIMIT ?1")?;
        let rows = stmt
          .query_map(rusqlite::params![limit], RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }

  async fn upsert(&self, record: Record) -> Result<()> {
    let data       = encode_date(record.date);
    let status     = encode_status(record.status);
    let created_at = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO ciclo_agua (data, status, created_at) VALUES (?1, ?2, ?3)
           ON CONFLICT (data) DO UPDATE
             SET status = excluded.status, created_at = excluded.created_at",
          rusqlite::params![data, status, created_at],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
