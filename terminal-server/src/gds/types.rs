//! Wire types for the GDS `ui_schedules` endpoint.

use serde::Deserialize;
use serde_json::Value;

use super::error::GdsError;

/// The raw header/row table: element 0 names the columns, every later
/// element is one data row. Cell values are heterogeneous (strings and
/// numbers), so they stay as JSON values until reshaping.
pub type ScheduleTable = Vec<Vec<Value>>;

/// Top-level body of a `ui_schedules` response.
///
/// The GDS signals failure in-band with an `error` string rather than
/// an HTTP status, so both fields are optional and checked explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct UiSchedulesResponse {
    pub result: Option<ScheduleTable>,
    pub error: Option<String>,
}

impl UiSchedulesResponse {
    /// Extract the schedule table, surfacing in-band errors.
    ///
    /// An `error` field wins over `result`; a body with neither is
    /// treated as malformed.
    pub fn into_table(self) -> Result<ScheduleTable, GdsError> {
        if let Some(message) = self.error {
            return Err(GdsError::Data { message });
        }
        self.result.ok_or_else(|| GdsError::Data {
            message: "GDS response has no result array".to_string(),
        })
    }
}

/// Parse a `ui_schedules` response body into its schedule table.
pub(super) fn parse_ui_schedules(body: &str) -> Result<ScheduleTable, GdsError> {
    let response: UiSchedulesResponse =
        serde_json::from_str(body).map_err(|e| GdsError::Data {
            message: format!("invalid JSON from GDS: {e}"),
        })?;
    response.into_table()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_result_table() {
        let body = r#"{"result":[["dep_time","travel_name"],["08:00","Pullman Costa"]]}"#;
        let table = parse_ui_schedules(body).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table[0], vec![json!("dep_time"), json!("travel_name")]);
        assert_eq!(table[1], vec![json!("08:00"), json!("Pullman Costa")]);
    }

    #[test]
    fn error_field_wins() {
        let body = r#"{"error":"invalid date","result":[]}"#;
        let err = parse_ui_schedules(body).unwrap_err();

        match err {
            GdsError::Data { message } => assert_eq!(message, "invalid date"),
            other => panic!("expected data error, got {other:?}"),
        }
    }

    #[test]
    fn missing_result_is_data_error() {
        let err = parse_ui_schedules("{}").unwrap_err();
        assert!(matches!(err, GdsError::Data { .. }));
        assert!(err.to_string().contains("no result array"));
    }

    #[test]
    fn non_json_body_is_data_error() {
        let err = parse_ui_schedules("<html>504 Gateway Time-out</html>").unwrap_err();
        assert!(matches!(err, GdsError::Data { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn heterogeneous_cells_survive() {
        let body = r#"{"result":[["id","dep_time"],[9166,"07:30"]]}"#;
        let table = parse_ui_schedules(body).unwrap();

        assert_eq!(table[1][0], json!(9166));
        assert_eq!(table[1][1], json!("07:30"));
    }
}
