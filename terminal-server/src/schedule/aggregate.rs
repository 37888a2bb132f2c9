//! Departure board aggregation.
//!
//! Queries the GDS once per catalog destination, sequentially, and
//! merges the carrier's services into one board sorted by departure
//! time of day. The first failure of any kind aborts the whole run: the
//! board never shows a partial list that silently lacks a destination.

use std::future::Future;

use chrono::NaiveDate;

use crate::gds::{GdsError, ScheduleTable};

use super::record::{ScheduleRecord, reshape_table};
use super::time::minute_of_day;

/// The carrier this terminal's board shows. Services run by anyone
/// else are dropped at the filter, never transformed.
pub const CARRIER: &str = "Pullman Costa";

/// Source of raw schedule tables, one fetch per origin/destination pair.
///
/// Implemented by the live `GdsClient` and by `MockGdsClient` in tests.
pub trait ScheduleSource {
    fn ui_schedules(
        &self,
        origin_id: u32,
        destination_id: u32,
        date: NaiveDate,
    ) -> impl Future<Output = Result<ScheduleTable, GdsError>> + Send;
}

/// Build the aggregated departure board for `date`.
///
/// Destinations are fetched one at a time in catalog order; an entry
/// equal to the origin is skipped. Each response is reshaped, filtered
/// to [`CARRIER`], and appended; the merged list is then stable-sorted
/// by departure minute-of-day, so services sharing a `dep_time` keep
/// their fetch order.
pub async fn aggregate_schedules<S: ScheduleSource>(
    source: &S,
    origin_id: u32,
    destination_ids: &[u32],
    date: NaiveDate,
) -> Result<Vec<ScheduleRecord>, GdsError> {
    let mut records = Vec::new();

    for &destination_id in destination_ids {
        if destination_id == origin_id {
            continue;
        }

        let table = source.ui_schedules(origin_id, destination_id, date).await?;
        let normalized = reshape_table(&table).map_err(|e| GdsError::Data {
            message: e.to_string(),
        })?;

        let before = records.len();
        records.extend(normalized.into_iter().filter(|r| r.travel_name == CARRIER));
        tracing::debug!(
            destination_id,
            kept = records.len() - before,
            "fetched destination schedules"
        );
    }

    sort_by_departure(records)
}

/// Stable-sort records by departure minute-of-day.
///
/// Keys are computed up front so a malformed `dep_time` surfaces as a
/// data error instead of poisoning the comparator.
fn sort_by_departure(records: Vec<ScheduleRecord>) -> Result<Vec<ScheduleRecord>, GdsError> {
    let mut keyed = Vec::with_capacity(records.len());
    for record in records {
        let key = minute_of_day(&record.dep_time).map_err(|e| GdsError::Data {
            message: format!("bad dep_time {:?}: {e}", record.dep_time),
        })?;
        keyed.push((key, record));
    }

    keyed.sort_by_key(|(key, _)| *key);

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
