//! SQL schema for the Cordeiro SQLite store.
//!
//! Executed once at connection startup. There is no migration path; the
//! version pragma only records which layout created the file.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Prayer requests are never deleted. is_approved and is_answered only ever
-- go from 0 to 1, and testimony is only ever overwritten, never nulled.
CREATE TABLE IF NOT EXISTS prayer_requests (
    id           TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    message      TEXT NOT NULL,
    is_public    INTEGER NOT NULL DEFAULT 1,
    is_approved  INTEGER NOT NULL DEFAULT 0,
    is_answered  INTEGER NOT NULL DEFAULT 0,
    testimony    TEXT,
    created_at   TEXT NOT NULL,   -- fixed-width RFC 3339 UTC; server-assigned
    CHECK (testimony IS NULL OR is_answered = 1)
);

CREATE TABLE IF NOT EXISTS events (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    date        TEXT NOT NULL,
    time        TEXT NOT NULL,
    location    TEXT NOT NULL,
    kind        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS reading_plan (
    id       TEXT PRIMARY KEY,
    day      INTEGER NOT NULL,
    book     TEXT NOT NULL,
    chapters TEXT NOT NULL,
    date     TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS status_checks (
    id          TEXT PRIMARY KEY,
    client_name TEXT NOT NULL,
    timestamp   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS prayer_visibility_idx
    ON prayer_requests(is_public, is_approved, created_at);
CREATE INDEX IF NOT EXISTS events_date_idx    ON events(date);
CREATE INDEX IF NOT EXISTS events_title_idx   ON events(title);
CREATE INDEX IF NOT EXISTS reading_day_idx    ON reading_plan(day);

PRAGMA user_version = 1;
";
