//! Model module containing data structures

mod sensor_row;
mod time_series_table;

pub use sensor_row::SensorRow;
pub use time_series_table::TimeSeriesTable;
