//! [`SqliteStore`]: the SQLite implementation of [`ChurchStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use cordeiro_core::{
  event::Event,
  prayer::{PrayerPatch, PrayerRequest},
  reading::ReadingPlanEntry,
  status::StatusCheck,
  store::{ChurchStore, PrayerQuery},
};

use crate::{
  Result,
  encode::{
    EVENT_COLUMNS, PRAYER_COLUMNS, READING_COLUMNS, RawEvent, RawPrayerRequest, RawReading,
    RawStatusCheck, encode_dt, encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A church store backed by a single SQLite file.
///
/// Clones share one background connection.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// SQLite treats a negative LIMIT as "no limit".
fn sql_limit(limit: Option<usize>) -> i64 {
  limit.and_then(|l| i64::try_from(l).ok()).unwrap_or(-1)
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a private in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn query_one_event(
    &self,
    sql: String,
    param: String,
  ) -> Result<Option<Event>> {
    let raw: Option<RawEvent> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![param], RawEvent::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawEvent::into_event).transpose()
  }
}

// ─── ChurchStore impl ────────────────────────────────────────────────────────

impl ChurchStore for SqliteStore {
  type Error = crate::Error;

  // ── Prayer requests ───────────────────────────────────────────────────────

  async fn insert_prayer_request(&self, request: &PrayerRequest) -> Result<()> {
    let id_str      = encode_uuid(request.id);
    let name        = request.name.clone();
    let message     = request.message.clone();
    let is_public   = request.is_public;
    let is_approved = request.is_approved;
    let is_answered = request.is_answered;
    let testimony   = request.testimony.clone();
    let at_str      = encode_dt(request.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO prayer_requests (
             id, name, message, is_public, is_approved, is_answered,
             testimony, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            name,
            message,
            is_public,
            is_approved,
            is_answered,
            testimony,
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn find_prayer_requests(&self, query: &PrayerQuery) -> Result<Vec<PrayerRequest>> {
    let is_public   = query.is_public;
    let is_approved = query.is_approved;
    let limit_val   = sql_limit(query.limit);

    let raws: Vec<RawPrayerRequest> = self
      .conn
      .call(move |conn| {
        // Equal timestamps fall back to insertion order, newest first.
        let sql = format!(
          "SELECT {PRAYER_COLUMNS}
           FROM prayer_requests
           WHERE (?1 IS NULL OR is_public = ?1)
             AND (?2 IS NULL OR is_approved = ?2)
           ORDER BY created_at DESC, rowid DESC
           LIMIT ?3"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![is_public, is_approved, limit_val],
            RawPrayerRequest::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPrayerRequest::into_request).collect()
  }

  async fn get_prayer_request(&self, id: Uuid) -> Result<Option<PrayerRequest>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawPrayerRequest> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {PRAYER_COLUMNS} FROM prayer_requests WHERE id = ?1"),
              rusqlite::params![id_str],
              RawPrayerRequest::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPrayerRequest::into_request).transpose()
  }

  async fn update_prayer_request(&self, id: Uuid, patch: PrayerPatch) -> Result<u64> {
    let id_str = encode_uuid(id);

    // SQLite counts every row the WHERE clause matched, changed or not.
    let matched: usize = self
      .conn
      .call(move |conn| {
        let n = match patch {
          PrayerPatch::Approve => conn.execute(
            "UPDATE prayer_requests SET is_approved = 1 WHERE id = ?1",
            rusqlite::params![id_str],
          )?,
          PrayerPatch::Answer { testimony } => conn.execute(
            "UPDATE prayer_requests SET is_answered = 1, testimony = ?2 WHERE id = ?1",
            rusqlite::params![id_str, testimony],
          )?,
        };
        Ok(n)
      })
      .await?;

    Ok(matched as u64)
  }

  // ── Events ────────────────────────────────────────────────────────────────

  async fn insert_event(&self, event: &Event) -> Result<()> {
    let id_str      = encode_uuid(event.id);
    let title       = event.title.clone();
    let description = event.description.clone();
    let date_str    = encode_dt(event.date);
    let time        = event.time.clone();
    let location    = event.location.clone();
    let kind        = event.kind.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO events (id, title, description, date, time, location, kind)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![id_str, title, description, date_str, time, location, kind],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_events(&self, limit: usize) -> Result<Vec<Event>> {
    let limit_val = sql_limit(Some(limit));

    let raws: Vec<RawEvent> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {EVENT_COLUMNS} FROM events ORDER BY date ASC LIMIT ?1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val], RawEvent::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEvent::into_event).collect()
  }

  async fn next_event(&self, after: DateTime<Utc>) -> Result<Option<Event>> {
    self
      .query_one_event(
        format!(
          "SELECT {EVENT_COLUMNS} FROM events WHERE date >= ?1 ORDER BY date ASC LIMIT 1"
        ),
        encode_dt(after),
      )
      .await
  }

  async fn find_event_by_title(&self, title: &str) -> Result<Option<Event>> {
    self
      .query_one_event(
        format!("SELECT {EVENT_COLUMNS} FROM events WHERE title = ?1 LIMIT 1"),
        title.to_owned(),
      )
      .await
  }

  // ── Reading plan ──────────────────────────────────────────────────────────

  async fn insert_reading(&self, entry: &ReadingPlanEntry) -> Result<()> {
    let id_str   = encode_uuid(entry.id);
    let day      = i64::from(entry.day);
    let book     = entry.book.clone();
    let chapters = entry.chapters.clone();
    let date_str = encode_dt(entry.date);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO reading_plan (id, day, book, chapters, date)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, day, book, chapters, date_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_reading_plan(&self, limit: usize) -> Result<Vec<ReadingPlanEntry>> {
    let limit_val = sql_limit(Some(limit));

    let raws: Vec<RawReading> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {READING_COLUMNS} FROM reading_plan ORDER BY day ASC LIMIT ?1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val], RawReading::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReading::into_entry).collect()
  }

  async fn reading_for_day(&self, day: u16) -> Result<Option<ReadingPlanEntry>> {
    let day = i64::from(day);

    let raw: Option<RawReading> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {READING_COLUMNS} FROM reading_plan WHERE day = ?1 LIMIT 1"),
              rusqlite::params![day],
              RawReading::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawReading::into_entry).transpose()
  }

  // ── Status checks ─────────────────────────────────────────────────────────

  async fn insert_status_check(&self, check: &StatusCheck) -> Result<()> {
    let id_str      = encode_uuid(check.id);
    let client_name = check.client_name.clone();
    let at_str      = encode_dt(check.timestamp);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO status_checks (id, client_name, timestamp) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, client_name, at_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_status_checks(&self, limit: usize) -> Result<Vec<StatusCheck>> {
    let limit_val = sql_limit(Some(limit));

    let raws: Vec<RawStatusCheck> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, client_name, timestamp FROM status_checks
           ORDER BY timestamp ASC LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val], |row| {
            Ok(RawStatusCheck {
              id:          row.get(0)?,
              client_name: row.get(1)?,
              timestamp:   row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawStatusCheck::into_check).collect()
  }
}
