//! SQL schema for the local record store.
//!
//! Mirrors the hosted `ciclo_agua` table so both backends hold the same rows.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per calendar day; writes for an existing day replace the status.
CREATE TABLE IF NOT EXISTS ciclo_agua (
    data        TEXT PRIMARY KEY,   -- YYYY-MM-DD
    status      TEXT NOT NULL CHECK (status IN ('SIM', 'NAO', 'PAUSA')),
    created_at  TEXT NOT NULL       -- RFC 3339 UTC; time of the last write
);

PRAGMA user_version = 1;
";
