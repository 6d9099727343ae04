//! Time series table model

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{Result, SeriesError};
use crate::model::SensorRow;

/// Timestamped rows over a fixed set of named numeric fields.
///
/// Rows are strictly ascending by timestamp; construction and [`push`]
/// reject anything else, so consumers may rely on `last()` being the most
/// recent reading.
///
/// [`push`]: TimeSeriesTable::push
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesTable {
    fields: Vec<String>,
    rows: Vec<SensorRow>,
}

impl TimeSeriesTable {
    /// Build a table, validating row width and timestamp order.
    pub fn new(fields: Vec<String>, rows: Vec<SensorRow>) -> Result<Self> {
        let mut table = Self {
            fields,
            rows: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            table.push(row)?;
        }
        Ok(table)
    }

    /// Table with the given schema and no rows.
    pub fn empty(fields: Vec<String>) -> Self {
        Self {
            fields,
            rows: Vec::new(),
        }
    }

    /// Append a row after the current last row.
    pub fn push(&mut self, row: SensorRow) -> Result<()> {
        let index = self.rows.len();
        if row.values.len() != self.fields.len() {
            return Err(SeriesError::RowWidth {
                index,
                expected: self.fields.len(),
                actual: row.values.len(),
            });
        }
        if let Some(previous) = self.last_timestamp() {
            if row.timestamp <= previous {
                return Err(SeriesError::UnorderedTimestamps {
                    index,
                    previous,
                    current: row.timestamp,
                });
            }
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn rows(&self) -> &[SensorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&SensorRow> {
        self.rows.last()
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.rows.first().map(|row| row.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.rows.last().map(|row| row.timestamp)
    }

    /// Position of `name` in the schema.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field == name)
    }

    /// Row counted from the end: `1` is the last row, `2` the one before it.
    pub fn row_from_end(&self, position: usize) -> Option<&SensorRow> {
        if position == 0 || position > self.rows.len() {
            return None;
        }
        self.rows.get(self.rows.len() - position)
    }

    /// Value of `name` in `row`, if the field exists.
    pub fn value_in(&self, row: &SensorRow, name: &str) -> Option<f64> {
        self.field_index(name)
            .and_then(|index| row.values.get(index).copied())
    }

    /// Value of `name` in the last row.
    pub fn latest(&self, name: &str) -> Option<f64> {
        self.last().and_then(|row| self.value_in(row, name))
    }

    /// `(timestamp, value)` pairs of a single field.
    pub fn column(&self, name: &str) -> Option<Vec<(NaiveDateTime, f64)>> {
        let index = self.field_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| (row.timestamp, row.values[index]))
                .collect(),
        )
    }

    /// Rows at or after `cutoff`, keeping the schema.
    pub fn since(&self, cutoff: NaiveDateTime) -> Self {
        let start = self.rows.partition_point(|row| row.timestamp < cutoff);
        Self {
            fields: self.fields.clone(),
            rows: self.rows[start..].to_vec(),
        }
    }
}
