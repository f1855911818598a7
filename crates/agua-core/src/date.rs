//! Calendar-date helpers: the canonical [`DateKey`], month arithmetic and
//! past/present/future classification.
//!
//! All dates are naive local dates. The only function that reads the clock is
//! [`today`] (and [`tomorrow`], built on it); everything else takes its
//! reference day as an argument.

use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{Datelike, Local, Months, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── DateKey ─────────────────────────────────────────────────────────────────

/// Earliest year a [`DateKey`] can hold.
pub const MIN_YEAR: i32 = 0;
/// Latest year a [`DateKey`] can hold; later years need a fifth digit.
pub const MAX_YEAR: i32 = 9999;

fn in_range(date: NaiveDate) -> bool { (MIN_YEAR..=MAX_YEAR).contains(&date.year()) }

/// A calendar date whose canonical text form is `YYYY-MM-DD`.
///
/// Years are limited to [`MIN_YEAR`]..=[`MAX_YEAR`], so the text is always
/// ten characters and ordering is the same as lexicographic ordering of the
/// text.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
  /// Build a key from numeric parts. Fails for dates that do not exist or
  /// fall outside four-digit years.
  pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
    NaiveDate::from_ymd_opt(year, month, day)
      .filter(|d| in_range(*d))
      .map(Self)
      .ok_or_else(|| Error::InvalidDateFormat(format!("{year:04}-{month:02}-{day:02}")))
  }

  pub fn date(self) -> NaiveDate { self.0 }

  pub fn year(self) -> i32 { self.0.year() }

  pub fn month(self) -> u32 { self.0.month() }

  pub fn day(self) -> u32 { self.0.day() }

  /// Shift by a signed number of days, saturating at `0000-01-01` and
  /// `9999-12-31`.
  pub fn add_days(self, days: i64) -> Self {
    let shifted = TimeDelta::try_days(days).and_then(|d| self.0.checked_add_signed(d));
    match shifted {
      Some(date) if in_range(date) => Self(date),
      _ => {
        let edge = if days < 0 {
          NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
        } else {
          NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31)
        };
        edge.map_or(self, Self)
      }
    }
  }
}

impl fmt::Display for DateKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format("%Y-%m-%d"))
  }
}

impl FromStr for DateKey {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { from_date_key(s).map(Self) }
}

impl TryFrom<String> for DateKey {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl From<DateKey> for String {
  fn from(key: DateKey) -> Self { key.to_string() }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

pub fn to_date_key(date: NaiveDate) -> Result<DateKey> {
  if in_range(date) {
    Ok(DateKey(date))
  } else {
    Err(Error::InvalidDateFormat(date.to_string()))
  }
}

/// Parse strict `YYYY-MM-DD` text into a calendar date.
///
/// Exactly four year digits and two month and day digits are accepted; chrono
/// alone would also take unpadded fields or a sign on the year.
pub fn from_date_key(text: &str) -> Result<NaiveDate> {
  let bytes = text.as_bytes();
  let well_formed = bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    });
  if !well_formed {
    return Err(Error::InvalidDateFormat(text.to_owned()));
  }

  NaiveDate::parse_from_str(text, "%Y-%m-%d")
    .map_err(|_| Error::InvalidDateFormat(text.to_owned()))
}

// ─── Clock ───────────────────────────────────────────────────────────────────

/// The current local calendar date.
pub fn today() -> DateKey { DateKey(Local::now().date_naive()) }

pub fn tomorrow() -> DateKey { today().add_days(1) }

// ─── Arithmetic ──────────────────────────────────────────────────────────────

/// Signed number of whole days from `b` to `a` (`a - b`).
pub fn days_between(a: DateKey, b: DateKey) -> i64 { (a.0 - b.0).num_days() }

/// Where a date sits relative to the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
  Past,
  Present,
  Future,
}

/// Classify `key` relative to the local clock's [`today`].
pub fn classify(key: DateKey) -> DayClass { classify_against(key, today()) }

pub fn classify_against(key: DateKey, today: DateKey) -> DayClass {
  match key.cmp(&today) {
    Ordering::Less => DayClass::Past,
    Ordering::Equal => DayClass::Present,
    Ordering::Greater => DayClass::Future,
  }
}

// ─── YearMonth ───────────────────────────────────────────────────────────────

/// A validated calendar month, used as the explicit "displayed month" of the
/// calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
  /// Always the first day of the month.
  first: NaiveDate,
}

impl YearMonth {
  pub fn new(year: i32, month: u32) -> Result<Self> {
    NaiveDate::from_ymd_opt(year, month, 1)
      .filter(|d| in_range(*d))
      .map(|first| Self { first })
      .ok_or(Error::InvalidMonth { year, month })
  }

  /// The month that contains `key`.
  pub fn containing(key: DateKey) -> Self {
    Self { first: key.0.with_day(1).unwrap_or(key.0) }
  }

  pub fn year(self) -> i32 { self.first.year() }

  pub fn month(self) -> u32 { self.first.month() }

  /// The following month; `9999-12` has none and returns itself.
  pub fn next(self) -> Self { self.step(self.first.checked_add_months(Months::new(1))) }

  /// The preceding month; `0000-01` has none and returns itself.
  pub fn prev(self) -> Self { self.step(self.first.checked_sub_months(Months::new(1))) }

  fn step(self, first: Option<NaiveDate>) -> Self {
    match first {
      Some(first) if in_range(first) => Self { first },
      _ => self,
    }
  }

  pub fn first_day(self) -> DateKey { DateKey(self.first) }

  pub fn last_day(self) -> DateKey {
    DateKey(self.first + TimeDelta::days(i64::from(self.days_in_month()) - 1))
  }

  /// 28 to 31, accounting for leap years.
  pub fn days_in_month(self) -> u32 {
    match self.first.month() {
      2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
      2 => 28,
      4 | 6 | 9 | 11 => 30,
      _ => 31,
    }
  }

  /// Every day of the month in ascending order.
  pub fn days(self) -> impl Iterator<Item = DateKey> {
    let first = self.first;
    (0..self.days_in_month()).map(move |i| DateKey(first + TimeDelta::days(i64::from(i))))
  }

  /// Number of empty cells before day 1 in a Sunday-first week grid.
  pub fn leading_blanks(self) -> u32 { self.first.weekday().num_days_from_sunday() }
}

impl fmt::Display for YearMonth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.first.format("%Y-%m"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(s: &str) -> DateKey { s.parse().unwrap() }

  #[test]
  fn date_key_round_trips_through_text() {
    for s in ["2025-01-10", "2024-02-29", "1999-12-31", "2030-07-04"] {
      let date = from_date_key(s).unwrap();
      assert_eq!(to_date_key(date).unwrap().to_string(), s);
    }
  }

  #[test]
  fn from_date_key_rejects_malformed_text() {
    for bad in [
      "", "2025-1-10", "2025-01-1", "25-01-10", "2025/01/10", "+025-01-10",
      "2025-01-10T00:00", "abcd-ef-gh",
    ] {
      assert_eq!(
        from_date_key(bad),
        Err(Error::InvalidDateFormat(bad.to_owned())),
        "{bad:?} should be rejected"
      );
    }
  }

  #[test]
  fn from_date_key_rejects_impossible_dates() {
    assert!(from_date_key("2025-02-29").is_err());
    assert!(from_date_key("2025-13-01").is_err());
    assert!(from_date_key("2025-04-31").is_err());
    assert!(from_date_key("2024-02-29").is_ok());
  }

  #[test]
  fn ordering_matches_text_ordering() {
    let mut keys = vec![key("2025-03-01"), key("2024-12-31"), key("2025-01-10")];
    let mut texts: Vec<String> = keys.iter().map(ToString::to_string).collect();
    keys.sort();
    texts.sort();
    let sorted: Vec<String> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, texts);
  }

  #[test]
  fn days_between_is_antisymmetric() {
    let pairs = [
      ("2025-01-10", "2025-01-12"),
      ("2024-02-28", "2024-03-01"),
      ("2023-12-31", "2025-01-01"),
      ("2025-06-15", "2025-06-15"),
    ];
    for (a, b) in pairs {
      assert_eq!(days_between(key(a), key(b)), -days_between(key(b), key(a)));
    }
    assert_eq!(days_between(key("2024-03-01"), key("2024-02-28")), 2);
  }

  #[test]
  fn classify_against_reference_day() {
    let today = key("2025-01-10");
    assert_eq!(classify_against(key("2025-01-09"), today), DayClass::Past);
    assert_eq!(classify_against(today, today), DayClass::Present);
    assert_eq!(classify_against(key("2025-01-11"), today), DayClass::Future);
  }

  #[test]
  fn tomorrow_follows_today() {
    // Guard against running exactly at midnight.
    let before = today();
    let t = tomorrow();
    let delta = days_between(t, before);
    assert!(delta == 1 || delta == 2);
  }

  #[test]
  fn serde_uses_canonical_text() {
    let k = key("2025-01-10");
    assert_eq!(serde_json::to_string(&k).unwrap(), "\"2025-01-10\"");
    let back: DateKey = serde_json::from_str("\"2025-01-10\"").unwrap();
    assert_eq!(back, k);
    assert!(serde_json::from_str::<DateKey>("\"2025-1-10\"").is_err());
  }

  #[test]
  fn year_month_lengths() {
    let cases = [
      (2024, 2, 29),
      (2025, 2, 28),
      (1900, 2, 28),
      (2000, 2, 29),
      (2025, 4, 30),
      (2025, 12, 31),
    ];
    for (y, m, n) in cases {
      let ym = YearMonth::new(y, m).unwrap();
      assert_eq!(ym.days_in_month(), n, "{y}-{m}");
      assert_eq!(ym.days().count() as u32, n);
      assert_eq!(ym.last_day().day(), n);
    }
  }

  #[test]
  fn year_month_navigation_wraps_years() {
    let dec = YearMonth::new(2024, 12).unwrap();
    assert_eq!(dec.next(), YearMonth::new(2025, 1).unwrap());
    assert_eq!(dec.next().prev(), dec);
    assert_eq!(YearMonth::new(2025, 1).unwrap().prev(), dec);
  }

  #[test]
  fn year_month_rejects_bad_month() {
    assert_eq!(
      YearMonth::new(2025, 13),
      Err(Error::InvalidMonth { year: 2025, month: 13 })
    );
    assert!(YearMonth::new(2025, 0).is_err());
  }

  #[test]
  fn keys_stay_within_four_digit_years() {
    assert!(DateKey::from_ymd(12345, 6, 7).is_err());
    assert!(DateKey::from_ymd(-1, 12, 31).is_err());
    assert_eq!(DateKey::from_ymd(9999, 12, 31).unwrap(), key("9999-12-31"));
    assert_eq!(DateKey::from_ymd(0, 1, 1).unwrap(), key("0000-01-01"));

    let far = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
    assert_eq!(to_date_key(far), Err(Error::InvalidDateFormat("+10000-01-01".into())));
  }

  #[test]
  fn add_days_saturates_at_the_edges() {
    assert_eq!(key("9999-12-31").add_days(1), key("9999-12-31"));
    assert_eq!(key("9999-12-30").add_days(2), key("9999-12-31"));
    assert_eq!(key("0000-01-01").add_days(-3), key("0000-01-01"));
    assert_eq!(key("2025-01-10").add_days(i64::MAX), key("9999-12-31"));
  }

  #[test]
  fn year_month_rejects_five_digit_years() {
    assert_eq!(
      YearMonth::new(10000, 1),
      Err(Error::InvalidMonth { year: 10000, month: 1 })
    );
    assert!(YearMonth::new(262142, 12).is_err());
    assert!(YearMonth::new(-1, 12).is_err());
  }

  #[test]
  fn year_month_edges_keep_canonical_keys() {
    let last = YearMonth::new(9999, 12).unwrap();
    assert_eq!(last.next(), last);
    assert_eq!(last.days_in_month(), 31);
    assert_eq!(last.last_day(), key("9999-12-31"));
    assert_eq!(last.last_day().to_string().parse::<DateKey>().unwrap(), last.last_day());

    let first = YearMonth::new(0, 1).unwrap();
    assert_eq!(first.prev(), first);
    assert_eq!(first.first_day().to_string(), "0000-01-01");
    assert_eq!(first.days().count(), 31);
  }

  #[test]
  fn leading_blanks_counts_from_sunday() {
    // 2025-01-01 is a Wednesday; 2025-06-01 is a Sunday.
    assert_eq!(YearMonth::new(2025, 1).unwrap().leading_blanks(), 3);
    assert_eq!(YearMonth::new(2025, 6).unwrap().leading_blanks(), 0);
  }

  #[test]
  fn containing_finds_first_of_month() {
    let ym = YearMonth::containing(key("2025-01-10"));
    assert_eq!(ym.first_day(), key("2025-01-01"));
    assert_eq!(ym.to_string(), "2025-01");
  }
}
