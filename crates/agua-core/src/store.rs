//! The `RecordStore` trait — the persistence gateway.
//!
//! Implemented by `agua-rest` (the hosted table) and `agua-store-sqlite`.
//! Higher layers depend on this abstraction, usually through
//! [`crate::schedule::Schedule`], not on a concrete backend.

use std::future::Future;

use crate::{date::DateKey, record::Record};

/// Abstraction over the store holding confirmed records.
///
/// There is at most one record per date; [`RecordStore::upsert`] replaces an
/// existing one.
///
/// All methods return `Send` futures so the trait can be used from a
/// multi-threaded tokio runtime.
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The record for `date`, if one was confirmed.
  fn read_by_date(
    &self,
    date: DateKey,
  ) -> impl Future<Output = Result<Option<Record>, Self::Error>> + Send + '_;

  /// All records with `start <= date <= end`, ascending by date.
  fn read_range(
    &self,
    start: DateKey,
    end: DateKey,
  ) -> impl Future<Output = Result<Vec<Record>, Self::Error>> + Send + '_;

  /// The record with the greatest date — the cycle anchor.
  fn read_latest(&self) -> impl Future<Output = Result<Option<Record>, Self::Error>> + Send + '_;

  /// Up to `limit` records, newest first.
  fn read_recent(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Record>, Self::Error>> + Send + '_;

  /// Insert `record`, or overwrite the one already stored for its date.
  fn upsert(&self, record: Record) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
