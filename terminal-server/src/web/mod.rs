//! Web layer for the terminal dashboard.
//!
//! JSON endpoints consumed by the browser dashboard: the aggregated
//! departure board, the destination catalog, and a health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
