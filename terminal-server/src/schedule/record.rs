//! Normalized schedule records.
//!
//! Reshapes the GDS header/row table into keyed records. The fields the
//! board actually consumes are typed and required; everything else the
//! GDS sends (seat counts, service ids, durations) is forwarded
//! verbatim through an open passthrough bag, so upstream can add
//! columns without breaking us while drift in the consumed fields still
//! fails loudly at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::gds::ScheduleTable;

/// One service on the departure board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Departure time of day, "HH:MM"
    pub dep_time: String,

    /// Arrival time of day at the destination, "HH:MM"
    pub arr_time: String,

    /// Carrier name as the GDS spells it
    pub travel_name: String,

    /// Forwarded-not-validated fields: `id`, `number`, `origin_id`,
    /// `destination_id`, `duration`, `available_seats`, `total_seats`,
    /// and whatever else upstream adds
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Errors turning a schedule table into records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// Header cell at this index is not a string
    #[error("header field {index} is not a string: {value}")]
    HeaderField { index: usize, value: Value },

    /// A data row did not produce a valid record
    #[error("row {row} does not match header: {message}")]
    Row { row: usize, message: String },
}

/// Build records from a header/row table.
///
/// Element 0 names the columns; each later row pairs positionally with
/// it (`header[i]` keys `row[i]`). Rows shorter than the header simply
/// omit the trailing fields; surplus cells are dropped. An empty table
/// yields no records.
pub fn reshape_table(table: &ScheduleTable) -> Result<Vec<ScheduleRecord>, ShapeError> {
    let Some((header_row, data_rows)) = table.split_first() else {
        return Ok(Vec::new());
    };

    let mut header = Vec::with_capacity(header_row.len());
    for (index, cell) in header_row.iter().enumerate() {
        let name = cell.as_str().ok_or_else(|| ShapeError::HeaderField {
            index,
            value: cell.clone(),
        })?;
        header.push(name);
    }

    let mut records = Vec::with_capacity(data_rows.len());
    for (row_idx, row) in data_rows.iter().enumerate() {
        let mut fields = Map::new();
        for (name, value) in header.iter().zip(row) {
            fields.insert((*name).to_string(), value.clone());
        }

        let record: ScheduleRecord =
            serde_json::from_value(Value::Object(fields)).map_err(|e| ShapeError::Row {
                row: row_idx + 1,
                message: e.to_string(),
            })?;
        records.push(record);
    }

    Ok(records)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    prop_compose! {
        /// Extra column names, distinct from the required fields.
        fn extra_columns()(names in proptest::collection::hash_set("[a-z_]{1,12}", 0..6)) -> Vec<String> {
            names
                .into_iter()
                .filter(|n| !matches!(n.as_str(), "dep_time" | "arr_time" | "travel_name"))
                .collect()
        }
    }

    proptest! {
        /// The built record's value at each field name equals the row's
        /// value at that field's header index.
        #[test]
        fn zip_correctness(
            columns in extra_columns(),
            row_count in 1usize..5,
        ) {
            let mut header = vec![json!("dep_time"), json!("arr_time"), json!("travel_name")];
            header.extend(columns.iter().map(|c| json!(c)));

            let mut t = vec![header];
            for r in 0..row_count {
                let mut row = vec![json!("08:00"), json!("10:00"), json!("Pullman Costa")];
                row.extend(columns.iter().enumerate().map(|(i, _)| json!(r * 100 + i)));
                t.push(row);
            }

            let records = reshape_table(&t).unwrap();
            prop_assert_eq!(records.len(), row_count);

            for (r, record) in records.iter().enumerate() {
                for (i, column) in columns.iter().enumerate() {
                    prop_assert_eq!(&record.extra[column], &json!(r * 100 + i));
                }
            }
        }
    }
}
