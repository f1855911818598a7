//! Status values and confirmed records — the only data the remote store holds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Error, Result, date::DateKey};

// ─── StatusValue ─────────────────────────────────────────────────────────────

/// Whether water is supplied on a given day.
///
/// The wire form (`SIM`, `NAO`, `PAUSA`) is the text stored in the remote
/// table. Anything else is rejected, both by [`StatusValue::parse`] and by
/// serde.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
  EnumString,
)]
pub enum StatusValue {
  #[serde(rename = "SIM")]
  #[strum(serialize = "SIM")]
  Present,
  #[serde(rename = "NAO")]
  #[strum(serialize = "NAO")]
  Absent,
  /// The alternation is suspended; nothing can be predicted from this day.
  #[serde(rename = "PAUSA")]
  #[strum(serialize = "PAUSA")]
  Paused,
}

impl StatusValue {
  /// Parse the exact wire text.
  pub fn parse(text: &str) -> Result<Self> {
    Self::from_str(text).map_err(|_| Error::InvalidStatusValue(text.to_owned()))
  }

  /// The other side of the two-day cycle. A pause has no opposite.
  pub fn flipped(self) -> Option<Self> {
    match self {
      Self::Present => Some(Self::Absent),
      Self::Absent => Some(Self::Present),
      Self::Paused => None,
    }
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A confirmed observation for one day. At most one exists per date; writing
/// another for the same date replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  pub date:   DateKey,
  pub status: StatusValue,
}

impl Record {
  pub fn new(date: DateKey, status: StatusValue) -> Self { Self { date, status } }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn parse_accepts_wire_text() {
    assert_eq!(StatusValue::parse("SIM"), Ok(StatusValue::Present));
    assert_eq!(StatusValue::parse("NAO"), Ok(StatusValue::Absent));
    assert_eq!(StatusValue::parse("PAUSA"), Ok(StatusValue::Paused));
  }

  #[test]
  fn parse_rejects_anything_else() {
    for bad in ["", "sim", "NÃO", "YES", "PAUSE", " SIM"] {
      assert_eq!(
        StatusValue::parse(bad),
        Err(Error::InvalidStatusValue(bad.to_owned()))
      );
    }
  }

  #[test]
  fn display_matches_serde() {
    for status in StatusValue::iter() {
      let json = serde_json::to_string(&status).unwrap();
      assert_eq!(json, format!("\"{status}\""));
      assert_eq!(status.as_ref(), status.to_string());
    }
  }

  #[test]
  fn serde_rejects_unknown_status() {
    let err = serde_json::from_str::<Record>(r#"{"date":"2025-01-10","status":"TALVEZ"}"#);
    assert!(err.is_err());
  }

  #[test]
  fn flipped_alternates_and_pause_has_none() {
    assert_eq!(StatusValue::Present.flipped(), Some(StatusValue::Absent));
    assert_eq!(StatusValue::Absent.flipped(), Some(StatusValue::Present));
    assert_eq!(StatusValue::Paused.flipped(), None);
  }
}
