//! Weight history ingestion
//!
//! Reads the weight series from CSV. Row order is kept as-is: the file is
//! expected to be chronological and nothing here sorts it.

use crate::error::AppResult;
use nutrition_tracker_shared::validation::validate_weight_sample;
use nutrition_tracker_shared::WeightSample;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// One CSV row: `label,value[,day]`
#[derive(Debug, Deserialize)]
struct HistoryRow {
    label: String,
    value: f64,
    #[serde(default)]
    day: Option<i64>,
}

impl From<HistoryRow> for WeightSample {
    fn from(row: HistoryRow) -> Self {
        WeightSample {
            label: row.label,
            value: row.value,
            day: row.day,
        }
    }
}

/// Loaded series plus the number of rows that failed validation
#[derive(Debug, Clone, Default)]
pub struct WeightHistory {
    pub samples: Vec<WeightSample>,
    pub skipped: usize,
}

/// Load weight history from a CSV file
pub fn load_history(path: impl AsRef<Path>) -> AppResult<WeightHistory> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading weight history");
    let file = File::open(path)?;
    load_history_from_reader(file)
}

/// Load weight history from any CSV reader
///
/// Rows that parse but fail validation are skipped and counted. A row that
/// cannot be parsed at all is an error.
pub fn load_history_from_reader<R: Read>(reader: R) -> AppResult<WeightHistory> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut history = WeightHistory::default();

    for (index, row) in csv_reader.deserialize::<HistoryRow>().enumerate() {
        let sample = WeightSample::from(row?);
        match validate_weight_sample(&sample) {
            Ok(()) => history.samples.push(sample),
            Err(e) => {
                warn!(row = index + 1, label = %sample.label, error = %e, "Skipping weight entry");
                history.skipped += 1;
            }
        }
    }

    debug!(
        samples = history.samples.len(),
        skipped = history.skipped,
        "Weight history loaded"
    );

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_preserves_order() {
        let data = "label,value\n1,80.0\n8,78.6\n4,79.2\n";
        let history = load_history_from_reader(data.as_bytes()).unwrap();

        let labels: Vec<&str> = history.samples.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "8", "4"]);
        assert_eq!(history.skipped, 0);
    }

    #[test]
    fn test_optional_day_column() {
        let data = "label,value,day\nJan 1,80.0,0\nJan 8,79.0,7\nJan 9,78.8,\n";
        let history = load_history_from_reader(data.as_bytes()).unwrap();

        assert_eq!(history.samples[0].day, Some(0));
        assert_eq!(history.samples[1].day_offset(), Some(7));
        assert_eq!(history.samples[2].day, None);
    }

    #[test]
    fn test_invalid_rows_are_skipped() {
        let data = "label,value\n1,80.0\n2,900.0\n,79.0\n3,79.5\n";
        let history = load_history_from_reader(data.as_bytes()).unwrap();

        assert_eq!(history.samples.len(), 2);
        assert_eq!(history.skipped, 2);
    }

    #[test]
    fn test_unparseable_row_is_error() {
        let data = "label,value\n1,heavy\n";
        let err = load_history_from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(err.code(), "CSV_ERROR");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_history("does/not/exist.csv").unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
