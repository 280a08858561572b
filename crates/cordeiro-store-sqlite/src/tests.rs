//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{Duration, TimeZone as _, Utc};
use cordeiro_core::{
  Error as CoreError,
  event::{DEFAULT_LOCATION, Event, NewEvent},
  prayer::{NewPrayerRequest, PrayerPatch, PrayerRequest, PrayerService},
  reading::ReadingPlanEntry,
  status::StatusCheck,
  store::{ChurchStore, PrayerQuery},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn submission(name: &str, is_public: bool) -> NewPrayerRequest {
  NewPrayerRequest::new(name, "pray for my family", is_public).unwrap()
}

// ─── Prayer requests: store primitives ───────────────────────────────────────

#[tokio::test]
async fn insert_and_get_prayer_request() {
  let s = store().await;
  let request = PrayerRequest::from_submission(submission("Maria Santos", true));
  s.insert_prayer_request(&request).await.unwrap();

  let fetched = s.get_prayer_request(request.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, request.id);
  assert_eq!(fetched.name, "Maria Santos");
  assert!(fetched.is_public);
  assert!(!fetched.is_approved);
  assert!(!fetched.is_answered);
  assert!(fetched.testimony.is_none());
  // Nothing is lost in storage, including sub-second digits of `created_at`.
  assert_eq!(fetched, request);
}

#[tokio::test]
async fn get_prayer_request_missing_returns_none() {
  let s = store().await;
  assert!(s.get_prayer_request(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn update_counts_matches_not_changes() {
  let s = store().await;
  let request = PrayerRequest::from_submission(submission("Ana", true));
  s.insert_prayer_request(&request).await.unwrap();

  assert_eq!(s.update_prayer_request(request.id, PrayerPatch::Approve).await.unwrap(), 1);
  assert_eq!(s.update_prayer_request(request.id, PrayerPatch::Approve).await.unwrap(), 1);
  assert_eq!(s.update_prayer_request(Uuid::new_v4(), PrayerPatch::Approve).await.unwrap(), 0);
}

#[tokio::test]
async fn find_without_filters_returns_everything() {
  let s = store().await;
  s.insert_prayer_request(&PrayerRequest::from_submission(submission("A", true)))
    .await
    .unwrap();
  s.insert_prayer_request(&PrayerRequest::from_submission(submission("B", false)))
    .await
    .unwrap();

  let all = s.find_prayer_requests(&PrayerQuery::default()).await.unwrap();
  assert_eq!(all.len(), 2);

  let private = s
    .find_prayer_requests(&PrayerQuery { is_public: Some(false), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(private.len(), 1);
  assert_eq!(private[0].name, "B");
}

// ─── Prayer requests: lifecycle over SQLite ──────────────────────────────────

#[tokio::test]
async fn submitted_request_is_hidden_until_approved() {
  let s = store().await;
  let service = PrayerService::new(&s);

  let r = service.submit(submission("Maria Santos", true)).await.unwrap();
  assert!(!r.is_approved);
  assert!(service.list_public_approved().await.unwrap().is_empty());

  service.approve(r.id).await.unwrap();
  let listed = service.list_public_approved().await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].id, r.id);
}

#[tokio::test]
async fn listing_matches_visibility_invariant() {
  let s = store().await;
  let service = PrayerService::new(&s);

  let mut all = Vec::new();
  for (is_public, approve) in [(true, true), (true, false), (false, true), (false, false)] {
    let r = service.submit(submission("X", is_public)).await.unwrap();
    if approve {
      service.approve(r.id).await.unwrap();
    }
    all.push(r.id);
  }

  let listed: Vec<Uuid> = service
    .list_public_approved()
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.id)
    .collect();

  for id in all {
    let r = service.get(id).await.unwrap();
    assert_eq!(listed.contains(&id), r.is_public && r.is_approved);
  }
}

#[tokio::test]
async fn approve_twice_succeeds_and_stays_approved() {
  let s = store().await;
  let service = PrayerService::new(&s);
  let r = service.submit(submission("Ana", true)).await.unwrap();

  service.approve(r.id).await.unwrap();
  service.approve(r.id).await.unwrap();
  service.answer(r.id, "Deus respondeu").await.unwrap();

  assert!(service.get(r.id).await.unwrap().is_approved);
}

#[tokio::test]
async fn answer_does_not_require_approval() {
  let s = store().await;
  let service = PrayerService::new(&s);
  let r = service.submit(submission("Ana", true)).await.unwrap();

  service.answer(r.id, "Deus respondeu").await.unwrap();
  let fetched = service.get(r.id).await.unwrap();
  assert!(fetched.is_answered);
  assert!(!fetched.is_approved);
  assert!(service.list_public_approved().await.unwrap().is_empty());
}

#[tokio::test]
async fn testimony_present_iff_answered() {
  let s = store().await;
  let service = PrayerService::new(&s);
  let answered = service.submit(submission("A", true)).await.unwrap();
  let pending = service.submit(submission("B", true)).await.unwrap();

  service.answer(answered.id, "first").await.unwrap();
  service.answer(answered.id, "second").await.unwrap();

  let a = service.get(answered.id).await.unwrap();
  assert!(a.is_answered);
  assert_eq!(a.testimony.as_deref(), Some("second"));

  let p = service.get(pending.id).await.unwrap();
  assert!(!p.is_answered);
  assert!(p.testimony.is_none());
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
  let s = store().await;
  let service = PrayerService::new(&s);

  assert!(matches!(
    service.approve(Uuid::new_v4()).await,
    Err(CoreError::PrayerRequestNotFound(_))
  ));
  assert!(matches!(
    service.answer(Uuid::new_v4(), "x").await,
    Err(CoreError::PrayerRequestNotFound(_))
  ));
  assert!(matches!(
    service.get(Uuid::new_v4()).await,
    Err(CoreError::PrayerRequestNotFound(_))
  ));
}

#[tokio::test]
async fn listing_is_newest_first() {
  let s = store().await;
  let service = PrayerService::new(&s);

  let mut t1 = PrayerRequest::from_submission(submission("t1", true));
  t1.created_at = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
  let mut t2 = PrayerRequest::from_submission(submission("t2", true));
  t2.created_at = t1.created_at + Duration::seconds(1);

  // Insert out of order so the sort has to do the work.
  s.insert_prayer_request(&t2).await.unwrap();
  s.insert_prayer_request(&t1).await.unwrap();
  service.approve(t1.id).await.unwrap();
  service.approve(t2.id).await.unwrap();

  let listed = service.list_public_approved().await.unwrap();
  assert_eq!(listed[0].id, t2.id);
  assert_eq!(listed[1].id, t1.id);
}

#[tokio::test]
async fn listing_is_capped() {
  let s = store().await;
  let service = PrayerService::new(&s);

  for i in 0..105 {
    let r = service.submit(submission(&format!("n{i}"), true)).await.unwrap();
    service.approve(r.id).await.unwrap();
  }

  let listed = service.list_public_approved().await.unwrap();
  assert_eq!(listed.len(), cordeiro_core::prayer::PUBLIC_LIST_LIMIT);
}

#[tokio::test]
async fn maria_santos_scenario() {
  let s = store().await;
  let service = PrayerService::new(&s);

  let r = service
    .submit(NewPrayerRequest::new("Maria Santos", "pray for my family", true).unwrap())
    .await
    .unwrap();
  assert!(!r.is_approved);
  assert!(!service.list_public_approved().await.unwrap().iter().any(|x| x.id == r.id));

  service.approve(r.id).await.unwrap();
  assert!(service.list_public_approved().await.unwrap().iter().any(|x| x.id == r.id));

  service.answer(r.id, "Prayer answered, thank God").await.unwrap();
  let fetched = service.get(r.id).await.unwrap();
  assert!(fetched.is_answered);
  assert_eq!(fetched.testimony.as_deref(), Some("Prayer answered, thank God"));
}

// ─── Events ──────────────────────────────────────────────────────────────────

fn event(title: &str, days_from_now: i64) -> Event {
  Event {
    id:          Uuid::new_v4(),
    title:       title.into(),
    description: "Culto de adoração e palavra".into(),
    date:        Utc::now() + Duration::days(days_from_now),
    time:        "19:30".into(),
    location:    DEFAULT_LOCATION.into(),
    kind:        "culto".into(),
  }
}

#[tokio::test]
async fn events_are_listed_by_date() {
  let s = store().await;
  let later = event("Later", 7);
  let sooner = event("Sooner", 1);
  s.insert_event(&later).await.unwrap();
  s.insert_event(&sooner).await.unwrap();

  let listed = s.list_events(100).await.unwrap();
  assert_eq!(listed.len(), 2);
  assert_eq!(listed[0].id, sooner.id);
  assert_eq!(listed[1].id, later.id);
}

#[tokio::test]
async fn next_event_skips_past_events() {
  let s = store().await;
  s.insert_event(&event("Past", -3)).await.unwrap();
  let upcoming = event("Upcoming", 2);
  s.insert_event(&upcoming).await.unwrap();
  s.insert_event(&event("Far", 30)).await.unwrap();

  let next = s.next_event(Utc::now()).await.unwrap().unwrap();
  assert_eq!(next.id, upcoming.id);

  let none = s.next_event(Utc::now() + Duration::days(60)).await.unwrap();
  assert!(none.is_none());
}

#[tokio::test]
async fn find_event_by_title() {
  let s = store().await;
  let e = event("Culto de Domingo", 1);
  s.insert_event(&e).await.unwrap();

  assert_eq!(s.find_event_by_title("Culto de Domingo").await.unwrap().unwrap().id, e.id);
  assert!(s.find_event_by_title("EBD").await.unwrap().is_none());
}

// ─── Reading plan ────────────────────────────────────────────────────────────

#[tokio::test]
async fn reading_plan_ordered_by_day() {
  let s = store().await;
  let now = Utc::now();
  s.insert_reading(&ReadingPlanEntry::new(2, "Gênesis", "4-6", now)).await.unwrap();
  s.insert_reading(&ReadingPlanEntry::new(1, "Gênesis", "1-3", now)).await.unwrap();

  let plan = s.list_reading_plan(365).await.unwrap();
  let days: Vec<u16> = plan.iter().map(|e| e.day).collect();
  assert_eq!(days, vec![1, 2]);

  let day_two = s.reading_for_day(2).await.unwrap().unwrap();
  assert_eq!(day_two.chapters, "4-6");
  assert!(s.reading_for_day(3).await.unwrap().is_none());
}

// ─── Status checks ───────────────────────────────────────────────────────────

#[tokio::test]
async fn status_checks_roundtrip() {
  let s = store().await;
  let check = StatusCheck::new("Igreja PIB Mobile App").unwrap();
  s.insert_status_check(&check).await.unwrap();

  let listed = s.list_status_checks(1000).await.unwrap();
  assert_eq!(listed, vec![check]);
}

// ─── Timestamp precision ─────────────────────────────────────────────────────

#[tokio::test]
async fn created_records_read_back_unchanged() {
  let s = store().await;
  let date = Utc.timestamp_opt(1_792_000_000, 641_044_907).unwrap();

  let event = Event::from_new(NewEvent {
    title:       "Culto de Oração".into(),
    description: String::new(),
    date,
    time:        "19:30".into(),
    location:    DEFAULT_LOCATION.into(),
    kind:        "culto".into(),
  });
  s.insert_event(&event).await.unwrap();
  assert_eq!(s.find_event_by_title("Culto de Oração").await.unwrap(), Some(event));

  let entry = ReadingPlanEntry::new(1, "Gênesis", "1-3", date);
  s.insert_reading(&entry).await.unwrap();
  assert_eq!(s.reading_for_day(1).await.unwrap(), Some(entry));
}
