//! Error types for `cordeiro-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  /// Input rejected at the boundary; nothing was persisted.
  #[error("invalid {field}: {reason}")]
  Invalid {
    field:  &'static str,
    reason: &'static str,
  },

  #[error("prayer request not found: {0}")]
  PrayerRequestNotFound(Uuid),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error so it can cross the store boundary.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject empty or whitespace-only text for a required field.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::Invalid { field, reason: "must not be blank" });
  }
  Ok(())
}
