//! Domain records, validation and the storage trait for the Cordeiro church
//! backend. No HTTP or SQL lives here.

// Store traits spell out `Send` on their returned futures.
#![allow(async_fn_in_trait)]

pub mod content;
pub mod error;
pub mod event;
pub mod prayer;
pub mod reading;
pub mod status;
pub mod store;
pub mod time;

pub use error::{Error, Result};
