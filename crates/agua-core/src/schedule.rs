//! [`Schedule`] — sequences gateway reads and feeds them to the cycle engine.
//!
//! A failed read is logged and treated as "no data": the views are still
//! produced from whatever else is available, falling back to the cycle and
//! finally to [`crate::cycle::FAIL_SAFE_STATUS`]. Only writes report failure
//! to the caller.

use tracing::{debug, info, warn};

use crate::{
  cycle::{DayEntry, generate_month, next_status_change_date},
  date::{DateKey, YearMonth},
  present::HomeView,
  record::{Record, StatusValue},
  store::RecordStore,
};

/// Default number of entries shown in the adjustment history.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// A month ready to be laid out as a calendar grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
  pub month: YearMonth,
  pub days:  Vec<DayEntry>,
}

/// High-level operations over any [`RecordStore`].
#[derive(Debug, Clone)]
pub struct Schedule<S> {
  store: S,
}

impl<S: RecordStore> Schedule<S> {
  pub fn new(store: S) -> Self { Self { store } }

  pub fn store(&self) -> &S { &self.store }

  // ── Reads (never fail) ────────────────────────────────────────────────────

  /// The most recent confirmed record, or `None` if there is none or the
  /// store could not be read.
  pub async fn anchor(&self) -> Option<Record> {
    match self.store.read_latest().await {
      Ok(latest) => {
        debug!(?latest, "loaded cycle anchor");
        latest
      }
      Err(e) => {
        warn!("reading latest record failed, continuing without anchor: {e}");
        None
      }
    }
  }

  async fn confirmed_on(&self, date: DateKey) -> Option<Record> {
    match self.store.read_by_date(date).await {
      Ok(record) => record,
      Err(e) => {
        warn!(%date, "reading record failed, treating as unconfirmed: {e}");
        None
      }
    }
  }

  /// Everything the home screen needs for `today`.
  pub async fn home(&self, today: DateKey) -> HomeView {
    let anchor = self.anchor().await;
    let confirmed = self.confirmed_on(today).await;
    HomeView::build(confirmed.map(|r| r.status), anchor.as_ref(), today)
  }

  /// Confirmed and inferred status for every day of `month`.
  pub async fn month(&self, month: YearMonth) -> MonthView {
    let confirmed = match self.store.read_range(month.first_day(), month.last_day()).await {
      Ok(records) => records,
      Err(e) => {
        warn!(%month, "reading month failed, showing inferred days only: {e}");
        Vec::new()
      }
    };
    let anchor = self.anchor().await;
    MonthView { month, days: generate_month(month, &confirmed, anchor.as_ref()) }
  }

  /// Up to `limit` most recent records, newest first.
  pub async fn history(&self, limit: usize) -> Vec<Record> {
    match self.store.read_recent(limit).await {
      Ok(records) => records,
      Err(e) => {
        warn!("reading history failed: {e}");
        Vec::new()
      }
    }
  }

  /// When water is next expected according to the latest record.
  pub async fn next_change(&self, today: DateKey) -> Option<DateKey> {
    next_status_change_date(self.anchor().await.as_ref(), today)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  /// Confirm today's status, replacing any earlier record for the day.
  pub async fn record_today(
    &self,
    status: StatusValue,
    today: DateKey,
  ) -> Result<Record, S::Error> {
    self.write(today, status).await
  }

  async fn write(&self, date: DateKey, status: StatusValue) -> Result<Record, S::Error> {
    let record = Record::new(date, status);
    self.store.upsert(record).await?;
    info!(%date, %status, "status saved");
    Ok(record)
  }

  /// Populate an empty store: yesterday had water, today has none, tomorrow
  /// has water again.
  pub async fn seed(&self, today: DateKey) -> Result<Vec<Record>, S::Error> {
    let plan = [
      (today.add_days(-1), StatusValue::Present),
      (today, StatusValue::Absent),
      (today.add_days(1), StatusValue::Present),
    ];
    let mut written = Vec::with_capacity(plan.len());
    for (date, status) in plan {
      written.push(self.write(date, status).await?);
    }
    info!("initial seed written");
    Ok(written)
  }
}
