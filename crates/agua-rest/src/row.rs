//! Wire shape of a `ciclo_agua` row.

use agua_core::{
  date::DateKey,
  record::{Record, StatusValue},
};
use serde::{Deserialize, Serialize};

use crate::Result;

/// One row as PostgREST returns it. Extra columns (`id`, `created_at`) are
/// ignored; `data` and `status` must be valid or the whole response is
/// rejected.
#[derive(Debug, Serialize, Deserialize)]
pub struct Row {
  pub data:   DateKey,
  pub status: StatusValue,
}

impl From<Record> for Row {
  fn from(r: Record) -> Self { Self { data: r.date, status: r.status } }
}

impl From<Row> for Record {
  fn from(r: Row) -> Self { Record::new(r.data, r.status) }
}

/// Decode a JSON array response body.
pub fn decode_rows(body: &str) -> Result<Vec<Record>> {
  let rows: Vec<Row> = serde_json::from_str(body)?;
  Ok(rows.into_iter().map(Record::from).collect())
}
