//! Schedule normalization and aggregation.
//!
//! Turns the GDS header/row tables into keyed records, keeps only the
//! terminal's carrier, and merges every destination into one departure
//! board sorted by time of day.

mod aggregate;
mod record;
mod time;

pub use aggregate::{CARRIER, ScheduleSource, aggregate_schedules};
pub use record::{ScheduleRecord, ShapeError, reshape_table};
pub use time::{TimeError, minute_of_day};
