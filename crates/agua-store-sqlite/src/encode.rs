//! Conversions between domain types and the text stored in SQLite columns.
//!
//! Dates are stored in their canonical `YYYY-MM-DD` form, so `ORDER BY data`
//! is chronological. Statuses use the wire text (`SIM`, `NAO`, `PAUSA`).

use agua_core::{
  date::DateKey,
  record::{Record, StatusValue},
};
use chrono::{DateTime, Utc};

use crate::Result;

pub fn encode_date(date: DateKey) -> String { date.to_string() }

pub fn encode_status(status: StatusValue) -> &'static str {
  match status {
    StatusValue::Present => "SIM",
    StatusValue::Absent => "NAO",
    StatusValue::Paused => "PAUSA",
  }
}

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

/// A row as read from SQLite, before validation.
pub struct RawRecord {
  pub data:   String,
  pub status: String,
}

impl RawRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { data: row.get(0)?, status: row.get(1)? })
  }

  pub fn into_record(self) -> Result<Record> {
    Ok(Record::new(self.data.parse()?, StatusValue::parse(&self.status)?))
  }
}
