//! Bus terminal schedule aggregation server.
//!
//! Fetches per-destination timetables from the Kupos GDS API, filters
//! them to the terminal's carrier, and serves the merged departure
//! board as JSON for the operations dashboard.

pub mod catalog;
pub mod gds;
pub mod schedule;
pub mod web;
