//! Error type for `agua-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] agua_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("record limit too large: {0}")]
  Limit(usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
