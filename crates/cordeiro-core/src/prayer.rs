//! Prayer requests and their moderation lifecycle.
//!
//! A request is submitted by a member, optionally approved by a moderator
//! (which makes a public request visible to everyone) and optionally marked
//! answered with a testimony. Approval and answering are independent
//! monotonic flags; neither can be undone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  error::require_text,
  store::{ChurchStore, PrayerQuery},
};

/// Maximum number of requests returned by the public listing.
pub const PUBLIC_LIST_LIMIT: usize = 100;

// ─── Records ─────────────────────────────────────────────────────────────────

/// A stored prayer request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerRequest {
  pub id:          Uuid,
  pub name:        String,
  pub message:     String,
  pub is_public:   bool,
  pub is_approved: bool,
  pub is_answered: bool,
  /// Present iff `is_answered`; never cleared once set.
  pub testimony:   Option<String>,
  /// Server-assigned; never changes after creation.
  pub created_at:  DateTime<Utc>,
}

impl PrayerRequest {
  /// Build a freshly-submitted record with a new id and the current time.
  pub fn from_submission(input: NewPrayerRequest) -> Self {
    Self {
      id:          Uuid::new_v4(),
      name:        input.name,
      message:     input.message,
      is_public:   input.is_public,
      is_approved: false,
      is_answered: false,
      testimony:   None,
      created_at:  crate::time::now(),
    }
  }

  /// Whether this request belongs in the public listing.
  pub fn is_publicly_visible(&self) -> bool { self.is_public && self.is_approved }

  /// Apply a patch in place, with the same semantics every store must honour.
  pub fn apply(&mut self, patch: &PrayerPatch) {
    match patch {
      PrayerPatch::Approve => self.is_approved = true,
      PrayerPatch::Answer { testimony } => {
        self.is_answered = true;
        self.testimony = Some(testimony.clone());
      }
    }
  }
}

/// A validated submission. Construct with [`NewPrayerRequest::new`].
#[derive(Debug, Clone)]
pub struct NewPrayerRequest {
  name:      String,
  message:   String,
  is_public: bool,
}

impl NewPrayerRequest {
  /// Validate a submission; `name` and `message` must not be blank.
  pub fn new(
    name: impl Into<String>,
    message: impl Into<String>,
    is_public: bool,
  ) -> Result<Self> {
    let name = name.into();
    let message = message.into();
    require_text("name", &name)?;
    require_text("message", &message)?;
    Ok(Self { name, message, is_public })
  }
}

/// The only mutations a prayer request supports. No variant clears a flag
/// or the testimony.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrayerPatch {
  Approve,
  Answer { testimony: String },
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// Lifecycle operations over any [`ChurchStore`].
///
/// `approve` and `answer` are idempotent: they succeed whenever the id
/// exists, whatever the current flag state.
pub struct PrayerService<'s, S> {
  store: &'s S,
}

impl<'s, S: ChurchStore> PrayerService<'s, S> {
  pub fn new(store: &'s S) -> Self { Self { store } }

  /// Persist a new request and return it with its server-assigned fields.
  pub async fn submit(&self, input: NewPrayerRequest) -> Result<PrayerRequest> {
    let request = PrayerRequest::from_submission(input);
    self
      .store
      .insert_prayer_request(&request)
      .await
      .map_err(Error::store)?;
    Ok(request)
  }

  /// Public and approved requests, newest first, capped at
  /// [`PUBLIC_LIST_LIMIT`].
  pub async fn list_public_approved(&self) -> Result<Vec<PrayerRequest>> {
    let query = PrayerQuery {
      is_public:   Some(true),
      is_approved: Some(true),
      limit:       Some(PUBLIC_LIST_LIMIT),
    };
    self.store.find_prayer_requests(&query).await.map_err(Error::store)
  }

  pub async fn get(&self, id: Uuid) -> Result<PrayerRequest> {
    self
      .store
      .get_prayer_request(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::PrayerRequestNotFound(id))
  }

  pub async fn approve(&self, id: Uuid) -> Result<()> {
    self.patch(id, PrayerPatch::Approve).await
  }

  /// Mark a request answered, replacing any earlier testimony.
  pub async fn answer(&self, id: Uuid, testimony: impl Into<String>) -> Result<()> {
    let testimony = testimony.into();
    require_text("testimony", &testimony)?;
    self.patch(id, PrayerPatch::Answer { testimony }).await
  }

  async fn patch(&self, id: Uuid, patch: PrayerPatch) -> Result<()> {
    let matched = self
      .store
      .update_prayer_request(id, patch)
      .await
      .map_err(Error::store)?;
    if matched == 0 {
      return Err(Error::PrayerRequestNotFound(id));
    }
    Ok(())
  }
}
