//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use tower_http::cors::CorsLayer;

use crate::catalog;
use crate::gds::GdsError;
use crate::schedule::aggregate_schedules;

use super::dto::{DestinationsResponse, ErrorResponse, SchedulesResponse};
use super::state::AppState;

/// Create the application router.
///
/// CORS is permissive: the dashboard frontend is served from a
/// different origin and every endpoint here is read-only.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedules", get(schedules))
        .route("/destinations", get(destinations))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Aggregated carrier departure board for today.
///
/// Origin, destination set, and date are server-side; the endpoint
/// takes no parameters. Every invocation re-fetches all destinations.
async fn schedules(State(state): State<AppState>) -> Result<Json<SchedulesResponse>, AppError> {
    let gds = state.gds.as_deref().ok_or_else(|| {
        AppError::from(GdsError::NotConfigured(
            "KUPOS_API_KEY is not set".to_string(),
        ))
    })?;

    let date = Local::now().date_naive();
    let destination_ids = catalog::destination_ids();

    let schedules = aggregate_schedules(gds, catalog::ORIGIN_ID, &destination_ids, date)
        .await
        .map_err(AppError::from)?;

    Ok(Json(SchedulesResponse { schedules }))
}

/// Destination catalog for the dashboard's name lookup.
async fn destinations() -> Json<DestinationsResponse> {
    Json(DestinationsResponse {
        destinations: catalog::DESTINATIONS.to_vec(),
    })
}

/// Application error type.
///
/// The dashboard treats any non-success response as "could not load
/// schedules" and offers a manual retry, so every failure maps to a
/// single 500 with a human-readable message.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl From<GdsError> for AppError {
    fn from(e: GdsError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let AppError::Internal { message } = self;

        tracing::error!("{message}");

        let body = Json(ErrorResponse { error: message });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gds_errors_become_internal() {
        let err = AppError::from(GdsError::Data {
            message: "invalid date".into(),
        });
        let AppError::Internal { message } = err;
        assert!(message.contains("invalid date"));
    }

    #[test]
    fn missing_credential_message_names_the_variable() {
        let err = AppError::from(GdsError::NotConfigured(
            "KUPOS_API_KEY is not set".to_string(),
        ));
        let AppError::Internal { message } = err;
        assert!(message.contains("KUPOS_API_KEY"));
    }
}
