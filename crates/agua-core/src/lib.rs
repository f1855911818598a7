//! Core types and pure logic for the Água Hoje water-supply tracker.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::RecordStore`]; everything else here is
//! synchronous date arithmetic and cycle inference, plus the thin
//! [`schedule::Schedule`] layer that sequences gateway reads.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod cycle;
pub mod date;
pub mod error;
pub mod present;
pub mod record;
pub mod schedule;
pub mod store;

pub use error::{Error, Result};
