//! The daily Bible reading plan.

use chrono::{DateTime, Datelike as _, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of entries returned by a plan listing.
pub const READING_PLAN_LIMIT: usize = 365;

/// One day's reading, keyed by day of the year (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPlanEntry {
  pub id:       Uuid,
  pub day:      u16,
  pub book:     String,
  /// Chapter range, e.g. `"1-3"`.
  pub chapters: String,
  pub date:     DateTime<Utc>,
}

impl ReadingPlanEntry {
  pub fn new(day: u16, book: impl Into<String>, chapters: impl Into<String>, date: DateTime<Utc>) -> Self {
    Self {
      id: Uuid::new_v4(),
      day,
      book: book.into(),
      chapters: chapters.into(),
      date: crate::time::truncate(date),
    }
  }
}

/// The plan day that `at` falls on.
pub fn plan_day(at: DateTime<Utc>) -> u16 {
  // `ordinal` is 1..=366, which always fits.
  at.ordinal() as u16
}
