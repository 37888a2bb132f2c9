//! Mock GDS client for testing without API access.
//!
//! Serves canned per-destination responses as if they were live
//! `ui_schedules` results, and counts calls so tests can assert that a
//! given path never reached the network.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use crate::schedule::ScheduleSource;

use super::error::GdsError;
use super::types::ScheduleTable;

/// Canned outcome for one destination.
#[derive(Debug, Clone)]
enum MockResponse {
    /// Successful body with this schedule table
    Table(ScheduleTable),
    /// Non-success HTTP status
    HttpStatus(u16),
    /// Body-level failure (in-band `error`, missing `result`, bad JSON)
    DataError(String),
}

/// Mock GDS client keyed by destination id.
///
/// Destinations with no canned response behave like an HTTP 404, which
/// is what the GDS does for unknown location pairs.
#[derive(Debug, Clone, Default)]
pub struct MockGdsClient {
    responses: HashMap<u32, MockResponse>,
    calls: Arc<AtomicUsize>,
}

impl MockGdsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a successful schedule table for `destination_id`.
    pub fn with_table(mut self, destination_id: u32, table: ScheduleTable) -> Self {
        self.responses
            .insert(destination_id, MockResponse::Table(table));
        self
    }

    /// Fail `destination_id` with a non-success HTTP status.
    pub fn with_http_status(mut self, destination_id: u32, status: u16) -> Self {
        self.responses
            .insert(destination_id, MockResponse::HttpStatus(status));
        self
    }

    /// Fail `destination_id` with a body-level data error.
    pub fn with_data_error(mut self, destination_id: u32, message: impl Into<String>) -> Self {
        self.responses
            .insert(destination_id, MockResponse::DataError(message.into()));
        self
    }

    /// Number of `ui_schedules` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn mock_url(&self, origin_id: u32, destination_id: u32, date: NaiveDate) -> String {
        format!(
            "mock://gds/ui_schedules/{}/{}/{}.json",
            origin_id,
            destination_id,
            date.format("%Y-%m-%d")
        )
    }
}

impl ScheduleSource for MockGdsClient {
    async fn ui_schedules(
        &self,
        origin_id: u32,
        destination_id: u32,
        date: NaiveDate,
    ) -> Result<ScheduleTable, GdsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.responses.get(&destination_id) {
            Some(MockResponse::Table(table)) => Ok(table.clone()),
            Some(MockResponse::HttpStatus(status)) => Err(GdsError::Api {
                status: *status,
                url: self.mock_url(origin_id, destination_id, date),
            }),
            Some(MockResponse::DataError(message)) => Err(GdsError::Data {
                message: message.clone(),
            }),
            None => Err(GdsError::Api {
                status: 404,
                url: self.mock_url(origin_id, destination_id, date),
            }),
        }
    }
}
