//! Trailing-window selection.

use chrono::Duration;
use series_spi::TimeSeriesTable;

/// Rows no older than `span` before the most recent reading.
///
/// The cutoff is inclusive, so a 24 hour span over hourly data keeps 25 rows
/// when the history is long enough. An empty table yields an empty table, and
/// a span reaching past the earliest representable time keeps every row.
pub fn trailing_window(table: &TimeSeriesTable, span: Duration) -> TimeSeriesTable {
    match table
        .last_timestamp()
        .and_then(|last| last.checked_sub_signed(span))
    {
        Some(cutoff) => table.since(cutoff),
        None => table.clone(),
    }
}
