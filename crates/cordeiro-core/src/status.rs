//! Client status pings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, error::require_text};

/// Maximum number of status checks returned by a listing.
pub const STATUS_LIST_LIMIT: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
  pub id:          Uuid,
  pub client_name: String,
  pub timestamp:   DateTime<Utc>,
}

impl StatusCheck {
  /// Record a ping from `client_name` at the current time.
  pub fn new(client_name: impl Into<String>) -> Result<Self> {
    let client_name = client_name.into();
    require_text("client_name", &client_name)?;
    Ok(Self {
      id: Uuid::new_v4(),
      client_name,
      timestamp: crate::time::now(),
    })
  }
}
