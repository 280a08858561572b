//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 UTC strings with a fixed microsecond
//! fraction, so string order is chronological order. UUIDs are stored as
//! hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use cordeiro_core::{
  event::Event, prayer::PrayerRequest, reading::ReadingPlanEntry, status::StatusCheck,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const PRAYER_COLUMNS: &str =
  "id, name, message, is_public, is_approved, is_answered, testimony, created_at";

/// Raw values read directly from a `prayer_requests` row.
pub struct RawPrayerRequest {
  pub id:          String,
  pub name:        String,
  pub message:     String,
  pub is_public:   bool,
  pub is_approved: bool,
  pub is_answered: bool,
  pub testimony:   Option<String>,
  pub created_at:  String,
}

impl RawPrayerRequest {
  /// Map a row selected with [`PRAYER_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      name:        row.get(1)?,
      message:     row.get(2)?,
      is_public:   row.get(3)?,
      is_approved: row.get(4)?,
      is_answered: row.get(5)?,
      testimony:   row.get(6)?,
      created_at:  row.get(7)?,
    })
  }

  pub fn into_request(self) -> Result<PrayerRequest> {
    Ok(PrayerRequest {
      id:          decode_uuid(&self.id)?,
      name:        self.name,
      message:     self.message,
      is_public:   self.is_public,
      is_approved: self.is_approved,
      is_answered: self.is_answered,
      testimony:   self.testimony,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

pub const EVENT_COLUMNS: &str = "id, title, description, date, time, location, kind";

/// Raw strings read directly from an `events` row.
pub struct RawEvent {
  pub id:          String,
  pub title:       String,
  pub description: String,
  pub date:        String,
  pub time:        String,
  pub location:    String,
  pub kind:        String,
}

impl RawEvent {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      title:       row.get(1)?,
      description: row.get(2)?,
      date:        row.get(3)?,
      time:        row.get(4)?,
      location:    row.get(5)?,
      kind:        row.get(6)?,
    })
  }

  pub fn into_event(self) -> Result<Event> {
    Ok(Event {
      id:          decode_uuid(&self.id)?,
      title:       self.title,
      description: self.description,
      date:        decode_dt(&self.date)?,
      time:        self.time,
      location:    self.location,
      kind:        self.kind,
    })
  }
}

pub const READING_COLUMNS: &str = "id, day, book, chapters, date";

pub struct RawReading {
  pub id:       String,
  pub day:      i64,
  pub book:     String,
  pub chapters: String,
  pub date:     String,
}

impl RawReading {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:       row.get(0)?,
      day:      row.get(1)?,
      book:     row.get(2)?,
      chapters: row.get(3)?,
      date:     row.get(4)?,
    })
  }

  pub fn into_entry(self) -> Result<ReadingPlanEntry> {
    let day = u16::try_from(self.day)
      .map_err(|_| Error::OutOfRange { column: "day", value: self.day })?;
    Ok(ReadingPlanEntry {
      id: decode_uuid(&self.id)?,
      day,
      book: self.book,
      chapters: self.chapters,
      date: decode_dt(&self.date)?,
    })
  }
}

pub struct RawStatusCheck {
  pub id:          String,
  pub client_name: String,
  pub timestamp:   String,
}

impl RawStatusCheck {
  pub fn into_check(self) -> Result<StatusCheck> {
    Ok(StatusCheck {
      id:          decode_uuid(&self.id)?,
      client_name: self.client_name,
      timestamp:   decode_dt(&self.timestamp)?,
    })
  }
}
