//! Kupos GDS schedule API client.
//!
//! The GDS `ui_schedules` endpoint returns timetables in a tabular JSON
//! shape: `result[0]` is an array of field-name strings, every later
//! element is one data row with positionally matching values. A body
//! can instead carry an `error` string, and that takes precedence over
//! whatever else is present.

mod client;
mod error;
mod mock;
mod types;

pub use client::{GdsClient, GdsConfig};
pub use error::GdsError;
pub use mock::MockGdsClient;
pub use types::{ScheduleTable, UiSchedulesResponse};
