//! Cycle inference — predicting supply status from the most recent confirmed
//! record.
//!
//! Supply is assumed to alternate strictly every other day: two days after
//! the anchor repeat the anchor's status, the day in between has the
//! opposite. A pause suspends the assumption until a new confirmed record
//! arrives. "Cannot be determined" is `None`, never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
  date::{DateKey, YearMonth, days_between},
  record::{Record, StatusValue},
};

/// The status assumed for today when neither a confirmed record nor the cycle
/// can tell. Promising water that may not come is worse than the opposite.
pub const FAIL_SAFE_STATUS: StatusValue = StatusValue::Absent;

/// Predict the status of `target` from `anchor`.
///
/// Returns `None` without an anchor, for a paused anchor, and for any date
/// before the anchor.
pub fn predict_status(target: DateKey, anchor: Option<&Record>) -> Option<StatusValue> {
  let anchor = anchor?;
  if anchor.status == StatusValue::Paused {
    return None;
  }
  let delta = days_between(target, anchor.date);
  if delta < 0 {
    return None;
  }
  if delta % 2 == 0 { Some(anchor.status) } else { anchor.status.flipped() }
}

/// The date on which water is next expected, counted from the anchor.
///
/// Without any record the best guess is tomorrow; after a pause there is no
/// answer.
pub fn next_status_change_date(anchor: Option<&Record>, today: DateKey) -> Option<DateKey> {
  let Some(anchor) = anchor else {
    return Some(today.add_days(1));
  };
  match anchor.status {
    StatusValue::Present => Some(anchor.date.add_days(2)),
    StatusValue::Absent => Some(anchor.date.add_days(1)),
    StatusValue::Paused => None,
  }
}

/// The next supply date as seen from today's resolved status.
pub fn next_supply_date(status: StatusValue, today: DateKey) -> Option<DateKey> {
  match status {
    StatusValue::Present => Some(today.add_days(2)),
    StatusValue::Absent => Some(today.add_days(1)),
    StatusValue::Paused => None,
  }
}

/// Today's status: the confirmed one if any, else the cycle's prediction,
/// else [`FAIL_SAFE_STATUS`].
pub fn resolve_today_status(
  confirmed_today: Option<StatusValue>,
  anchor: Option<&Record>,
  today: DateKey,
) -> StatusValue {
  confirmed_today
    .or_else(|| predict_status(today, anchor))
    .unwrap_or(FAIL_SAFE_STATUS)
}

// ─── Month generation ────────────────────────────────────────────────────────

/// One day of a rendered month. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
  /// Day of month, starting at 1.
  pub day:       u32,
  pub date:      DateKey,
  pub status:    Option<StatusValue>,
  /// `true` when `status` came from a stored record rather than the cycle.
  pub confirmed: bool,
}

/// Status for every day of `month`, ascending.
///
/// A confirmed record always wins over the prediction for its date. Records
/// outside the month are ignored.
pub fn generate_month(
  month: YearMonth,
  confirmed: &[Record],
  anchor: Option<&Record>,
) -> Vec<DayEntry> {
  let by_date: HashMap<DateKey, StatusValue> =
    confirmed.iter().map(|r| (r.date, r.status)).collect();

  month
    .days()
    .map(|date| {
      let stored = by_date.get(&date).copied();
      DayEntry {
        day: date.day(),
        date,
        status: stored.or_else(|| predict_status(date, anchor)),
        confirmed: stored.is_some(),
      }
    })
    .collect()
}
