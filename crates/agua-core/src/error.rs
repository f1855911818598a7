//! Error types for `agua-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("invalid date format: {0:?} (expected YYYY-MM-DD)")]
  InvalidDateFormat(String),

  #[error("invalid status value: {0:?} (expected SIM, NAO or PAUSA)")]
  InvalidStatusValue(String),

  #[error("invalid month: {year}-{month}")]
  InvalidMonth { year: i32, month: u32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
