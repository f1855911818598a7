//! Error type for `agua-rest`.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("{method} {table} → {status}: {body}")]
  Status {
    method: &'static str,
    table:  String,
    status: StatusCode,
    body:   String,
  },

  #[error("invalid row from store: {0}")]
  Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
