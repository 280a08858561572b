//! Sample data inserted into a fresh store at startup.
//!
//! Seeding is idempotent: events are matched by title and the reading plan is
//! only written when empty, so restarting the server never duplicates rows.

use chrono::{DateTime, Datelike as _, Duration, Utc};
use cordeiro_core::{
  event::{DEFAULT_LOCATION, Event},
  reading::ReadingPlanEntry,
  store::ChurchStore,
  time,
};
use uuid::Uuid;

/// How many rows a [`seed`] run inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
  pub events:   usize,
  pub readings: usize,
}

/// The Sunday on or after `now`, at the same time of day.
fn upcoming_sunday(now: DateTime<Utc>) -> DateTime<Utc> {
  let from_monday = i64::from(now.weekday().num_days_from_monday());
  now + Duration::days((6 - from_monday).rem_euclid(7))
}

fn sample_events(now: DateTime<Utc>) -> Vec<Event> {
  let sunday = upcoming_sunday(now);
  [
    ("Culto de Domingo", "Culto de adoração e palavra", "19:30", "culto"),
    ("EBD - Escola Bíblica Dominical", "Estudo bíblico para toda família", "09:00", "estudo"),
  ]
  .into_iter()
  .map(|(title, description, time, kind)| Event {
    id:          Uuid::new_v4(),
    title:       title.into(),
    description: description.into(),
    date:        time::truncate(sunday),
    time:        time.into(),
    location:    DEFAULT_LOCATION.into(),
    kind:        kind.into(),
  })
  .collect()
}

fn sample_readings(now: DateTime<Utc>) -> Vec<ReadingPlanEntry> {
  [(1, "1-3"), (2, "4-6"), (3, "7-9")]
    .into_iter()
    .map(|(day, chapters)| {
      ReadingPlanEntry::new(day, "Gênesis", chapters, now + Duration::days(i64::from(day) - 1))
    })
    .collect()
}

/// Insert any missing sample events and, if the plan is empty, the starter
/// reading plan.
pub async fn seed<S: ChurchStore>(store: &S, now: DateTime<Utc>) -> Result<SeedReport, S::Error> {
  let mut report = SeedReport::default();

  for event in sample_events(now) {
    if store.find_event_by_title(&event.title).await?.is_none() {
      store.insert_event(&event).await?;
      report.events += 1;
    }
  }

  if store.list_reading_plan(1).await?.is_empty() {
    for entry in sample_readings(now) {
      store.insert_reading(&entry).await?;
      report.readings += 1;
    }
  }

  Ok(report)
}
