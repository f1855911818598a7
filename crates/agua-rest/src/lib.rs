//! Record store backed by the hosted PostgREST table.
//!
//! [`RestStore`] implements [`agua_core::store::RecordStore`] with one HTTP
//! request per operation. Rows are validated on the way in, so an unknown
//! status in the table surfaces as [`Error::Decode`] instead of leaking into
//! the cycle logic.

mod query;
mod row;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_TABLE, RestConfig, RestStore};
