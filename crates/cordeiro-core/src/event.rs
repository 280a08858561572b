//! Church calendar events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, error::require_text};

/// Location used when a new event does not name one.
pub const DEFAULT_LOCATION: &str = "Igreja PIB do Cordeiro";

/// Maximum number of events returned by a listing.
pub const EVENT_LIST_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub id:          Uuid,
  pub title:       String,
  pub description: String,
  pub date:        DateTime<Utc>,
  /// Display time, e.g. `"19:30"`.
  pub time:        String,
  pub location:    String,
  /// Free-form category: `culto`, `estudo`, `reuniao`, `evento`, ...
  #[serde(rename = "type")]
  pub kind:        String,
}

impl Event {
  pub fn from_new(input: NewEvent) -> Self {
    Self {
      id:          Uuid::new_v4(),
      title:       input.title,
      description: input.description,
      date:        crate::time::truncate(input.date),
      time:        input.time,
      location:    input.location,
      kind:        input.kind,
    }
  }
}

/// Input for creating an event. Deserialises from the public JSON body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
  pub title:       String,
  pub description: String,
  pub date:        DateTime<Utc>,
  pub time:        String,
  #[serde(default = "default_location")]
  pub location:    String,
  #[serde(rename = "type")]
  pub kind:        String,
}

impl NewEvent {
  pub fn validate(&self) -> Result<()> { require_text("title", &self.title) }
}

fn default_location() -> String { DEFAULT_LOCATION.to_owned() }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_location_uses_church_default() {
    let input: NewEvent = serde_json::from_value(serde_json::json!({
      "title": "Culto de Oração",
      "description": "Oração e jejum",
      "date": "2026-10-18T22:30:00Z",
      "time": "19:30",
      "type": "culto",
    }))
    .unwrap();
    assert_eq!(input.location, DEFAULT_LOCATION);

    let event = Event::from_new(input);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "culto");
    assert_eq!(json["location"], DEFAULT_LOCATION);
  }

  #[test]
  fn blank_title_fails_validation() {
    let input: NewEvent = serde_json::from_value(serde_json::json!({
      "title": " ",
      "description": "",
      "date": "2026-10-18T22:30:00Z",
      "time": "19:30",
      "type": "culto",
    }))
    .unwrap();
    assert!(input.validate().is_err());
  }
}
