//! The concrete store selected by configuration.

use agua_core::{date::DateKey, record::Record, store::RecordStore};
use agua_rest::RestStore;
use agua_store_sqlite::SqliteStore;
use anyhow::{Context, Result};
use thiserror::Error;

use crate::config::BackendSettings;

#[derive(Debug, Error)]
pub enum BackendError {
  #[error(transparent)]
  Rest(#[from] agua_rest::Error),

  #[error(transparent)]
  Sqlite(#[from] agua_store_sqlite::Error),
}

/// Either backend, dispatched statically.
#[derive(Clone)]
pub enum Backend {
  Rest(RestStore),
  Sqlite(SqliteStore),
}

impl Backend {
  pub async fn connect(settings: BackendSettings) -> Result<Self> {
    match settings {
      BackendSettings::Rest(config) => {
        tracing::debug!(url = %config.base_url, table = %config.table, "using hosted store");
        Ok(Self::Rest(RestStore::new(config).context("building HTTP client")?))
      }
      BackendSettings::Sqlite(path) => {
        tracing::debug!(path = %path.display(), "using local store");
        let store = SqliteStore::open(&path)
          .await
          .with_context(|| format!("failed to open store at {path:?}"))?;
        Ok(Self::Sqlite(store))
      }
    }
  }
}

impl RecordStore for Backend {
  type Error = BackendError;

  async fn read_by_date(&self, date: DateKey) -> Result<Option<Record>, BackendError> {
    Ok(match self {
      Self::Rest(s) => s.read_by_date(date).await?,
      Self::Sqlite(s) => s.read_by_date(date).await?,
    })
  }

  async fn read_range(&self, start: DateKey, end: DateKey) -> Result<Vec<Record>, BackendError> {
    Ok(match self {
      Self::Rest(s) => s.read_range(start, end).await?,
      Self::Sqlite(s) => s.read_range(start, end).await?,
    })
  }

  async fn read_latest(&self) -> Result<Option<Record>, BackendError> {
    Ok(match self {
      Self::Rest(s) => s.read_latest().await?,
      Self::Sqlite(s) => s.read_latest().await?,
    })
  }

  async fn read_recent(&self, limit: usize) -> Result<Vec<Record>, BackendError> {
    Ok(match self {
      Self::Rest(s) => s.read_recent(limit).await?,
      Self::Sqlite(s) => s.read_recent(limit).await?,
    })
  }

  async fn upsert(&self, record: Record) -> Result<(), BackendError> {
    match self {
      Self::Rest(s) => s.upsert(record).await?,
      Self::Sqlite(s) => s.upsert(record).await?,
    }
    Ok(())
  }
}
