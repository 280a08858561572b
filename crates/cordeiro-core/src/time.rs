//! Timestamp precision shared by every stored record.

use chrono::{DateTime, SubsecRound as _, Utc};

/// Fractional-second digits a store keeps. Records are truncated to this at
/// creation, so what a caller gets back equals what a later read returns.
pub const STORED_SUBSEC_DIGITS: u16 = 6;

/// Drop precision finer than a store keeps.
pub fn truncate(at: DateTime<Utc>) -> DateTime<Utc> { at.trunc_subsecs(STORED_SUBSEC_DIGITS) }

/// The current time at stored precision.
pub fn now() -> DateTime<Utc> { truncate(Utc::now()) }
