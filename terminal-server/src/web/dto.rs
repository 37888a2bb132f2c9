//! Data transfer objects for web responses.

use serde::Serialize;

use crate::catalog::Destination;
use crate::schedule::ScheduleRecord;

/// Response for the aggregated departure board.
#[derive(Debug, Serialize)]
pub struct SchedulesResponse {
    /// Carrier services across all destinations, sorted by departure
    pub schedules: Vec<ScheduleRecord>,
}

/// Response for the destination catalog.
#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    /// Served destinations in board order
    pub destinations: Vec<Destination>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schedules_response_shape() {
        let record: ScheduleRecord = serde_json::from_value(json!({
            "dep_time": "08:00",
            "arr_time": "10:00",
            "travel_name": "Pullman Costa",
            "available_seats": 12,
        }))
        .unwrap();

        let value = serde_json::to_value(SchedulesResponse {
            schedules: vec![record],
        })
        .unwrap();

        assert_eq!(
            value,
            json!({
                "schedules": [{
                    "dep_time": "08:00",
                    "arr_time": "10:00",
                    "travel_name": "Pullman Costa",
                    "available_seats": 12,
                }]
            })
        );
    }

    #[test]
    fn destinations_response_shape() {
        let value = serde_json::to_value(DestinationsResponse {
            destinations: vec![Destination {
                id: 2058,
                name: "Valparaíso",
            }],
        })
        .unwrap();

        assert_eq!(
            value,
            json!({ "destinations": [{ "id": 2058, "name": "Valparaíso" }] })
        );
    }

    #[test]
    fn error_response_shape() {
        let value = serde_json::to_value(ErrorResponse {
            error: "GDS data error: invalid date".into(),
        })
        .unwrap();

        assert_eq!(value, json!({ "error": "GDS data error: invalid date" }));
    }
}
