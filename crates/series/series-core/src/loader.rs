//! CSV loading for sensor history files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use series_spi::{Result, SensorRow, SeriesError, TimeSeriesTable};

/// Column holding row timestamps when the caller does not name one.
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "Timestamp";

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp cell. Date-only values land on midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Load a sensor CSV into a time-sorted table.
///
/// Every column other than `timestamp_column` becomes a numeric field. Blank
/// cells read as `NaN`. Rows are sorted by timestamp before the table is
/// built, so duplicate timestamps surface as
/// [`SeriesError::UnorderedTimestamps`].
pub fn load_csv(path: &Path, timestamp_column: &str) -> Result<TimeSeriesTable> {
    let file = File::open(path)
        .map_err(|e| SeriesError::FileNotFound(format!("{}: {}", path.display(), e)))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| SeriesError::Csv(e.to_string()))?
        .clone();

    let ts_idx = headers
        .iter()
        .position(|h| h.trim() == timestamp_column)
        .ok_or_else(|| SeriesError::MissingColumn(timestamp_column.to_string()))?;

    let field_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != ts_idx)
        .map(|(i, h)| (i, h.trim().to_string()))
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| SeriesError::Csv(e.to_string()))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let raw_ts = record.get(ts_idx).unwrap_or_default();
        let timestamp = parse_timestamp(raw_ts).ok_or_else(|| SeriesError::InvalidTimestamp {
            line,
            value: raw_ts.to_string(),
        })?;

        let mut values = Vec::with_capacity(field_columns.len());
        for (idx, name) in &field_columns {
            let cell = record.get(*idx).unwrap_or_default().trim();
            let value = if cell.is_empty() {
                f64::NAN
            } else {
                cell.parse::<f64>().map_err(|_| SeriesError::InvalidNumber {
                    line,
                    column: name.clone(),
                    value: cell.to_string(),
                })?
            };
            values.push(value);
        }

        rows.push(SensorRow::new(timestamp, values));
    }

    if rows.is_empty() {
        return Err(SeriesError::NoRows);
    }

    rows.sort_by_key(|row| row.timestamp);

    let fields = field_columns.into_iter().map(|(_, name)| name).collect();
    let table = TimeSeriesTable::new(fields, rows)?;
    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        fields = table.fields().len(),
        "loaded sensor history"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_load_csv() {
        let file = write_csv(&[
            "Timestamp,Temperature,pH,Moisture (%),N,P,K",
            "2024-01-01 00:00:00,24.1,6.5,40.2,210,195,185",
            "2024-01-01 01:00:00,24.3,6.4,40.0,209,194,184",
        ]);

        let table = load_csv(file.path(), DEFAULT_TIMESTAMP_COLUMN).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.fields(),
            &["Temperature", "pH", "Moisture (%)", "N", "P", "K"]
        );
        assert_eq!(table.latest("N"), Some(209.0));
        assert_eq!(table.latest("Moisture (%)"), Some(40.0));
    }

    #[test]
    fn test_load_csv_sorts_rows() {
        let file = write_csv(&[
            "N,Timestamp",
            "201,2024-01-01 02:00:00",
            "203,2024-01-01 00:00:00",
            "202,2024-01-01 01:00:00",
        ]);

        let table = load_csv(file.path(), DEFAULT_TIMESTAMP_COLUMN).unwrap();
        let values: Vec<f64> = table.column("N").unwrap().into_iter().map(|(_, v)| v).collect();

        assert_eq!(values, vec![203.0, 202.0, 201.0]);
        assert_eq!(table.fields(), &["N"]);
    }

    #[test]
    fn test_load_csv_rejects_duplicate_timestamps() {
        let file = write_csv(&[
            "Timestamp,N",
            "2024-01-01 00:00:00,200",
            "2024-01-01 00:00:00,201",
        ]);

        let result = load_csv(file.path(), DEFAULT_TIMESTAMP_COLUMN);
        assert!(matches!(
            result,
            Err(SeriesError::UnorderedTimestamps { .. })
        ));
    }

    #[test]
    fn test_load_csv_blank_cell_is_nan() {
        let file = write_csv(&["Timestamp,pH", "2024-01-01T00:00:00,"]);

        let table = load_csv(file.path(), DEFAULT_TIMESTAMP_COLUMN).unwrap();
        assert!(table.latest("pH").unwrap().is_nan());
    }

    #[test]
    fn test_load_csv_invalid_number() {
        let file = write_csv(&["Timestamp,pH", "2024-01-01 00:00,acidic"]);

        let result = load_csv(file.path(), DEFAULT_TIMESTAMP_COLUMN);
        assert_eq!(
            result.unwrap_err(),
            SeriesError::InvalidNumber {
                line: 2,
                column: "pH".to_string(),
                value: "acidic".to_string(),
            }
        );
    }

    #[test]
    fn test_load_csv_invalid_timestamp() {
        let file = write_csv(&["Timestamp,pH", "yesterday,6.5"]);

        let result = load_csv(file.path(), DEFAULT_TIMESTAMP_COLUMN);
        assert!(matches!(
            result,
            Err(SeriesError::InvalidTimestamp { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_csv_missing_timestamp_column() {
        let file = write_csv(&["Time,pH", "2024-01-01,6.5"]);

        let result = load_csv(file.path(), DEFAULT_TIMESTAMP_COLUMN);
        assert_eq!(
            result.unwrap_err(),
            SeriesError::MissingColumn("Timestamp".to_string())
        );
    }

    #[test]
    fn test_load_csv_header_only() {
        let file = write_csv(&["Timestamp,pH"]);

        let result = load_csv(file.path(), DEFAULT_TIMESTAMP_COLUMN);
        assert_eq!(result.unwrap_err(), SeriesError::NoRows);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let result = load_csv(Path::new("/nonexistent/coffee.csv"), DEFAULT_TIMESTAMP_COLUMN);
        assert!(matches!(result, Err(SeriesError::FileNotFound(_))));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2024-02-29 13:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-02-29T13:30:00"), Some(expected));
        assert_eq!(parse_timestamp(" 2024-02-29 13:30 "), Some(expected));
        assert_eq!(
            parse_timestamp("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_timestamp("29/02/2024"), None);
    }
}
