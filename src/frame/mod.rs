//! Frame module - column-oriented table holding a sampling frame
//!
//! A `Frame` is the in-memory population table: one `Series<String>` per
//! column, uniform row count, insertion-ordered column names. Sampling
//! operations borrow a `Frame` read-only and materialize their output as a
//! fresh `Frame` via [`Frame::take_rows`].

use std::collections::HashMap;

use crate::core::error::{Error, Result};
use crate::series::Series;

/// Frame struct: column-oriented 2D data structure
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: HashMap<String, Series<String>>,
    column_order: Vec<String>,
    row_count: usize,
}

impl Frame {
    /// Create a new empty Frame
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
            column_order: Vec::new(),
            row_count: 0,
        }
    }

    /// Get the number of rows in the Frame
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns in the Frame
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the Frame has no rows
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Check if the Frame contains a column with the given name
    pub fn contains_column(&self, column_name: &str) -> bool {
        self.columns.contains_key(column_name)
    }

    /// Get column names in insertion order
    pub fn column_names(&self) -> Vec<String> {
        self.column_order.clone()
    }

    /// Add a column to the Frame
    pub fn add_column(&mut self, column_name: String, series: Series<String>) -> Result<()> {
        if self.contains_column(&column_name) {
            return Err(Error::DuplicateColumnName(column_name));
        }

        let series_len = series.len();
        if !self.columns.is_empty() && series_len != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: series_len,
            });
        }

        self.columns.insert(column_name.clone(), series);
        self.column_order.push(column_name);

        if self.row_count == 0 {
            self.row_count = series_len;
        }

        Ok(())
    }

    /// Get a column from the Frame
    pub fn get_column(&self, column_name: &str) -> Result<&Series<String>> {
        self.columns
            .get(column_name)
            .ok_or_else(|| Error::ColumnNotFound(column_name.to_string()))
    }

    /// Parse a column as numeric values
    pub fn numeric_column(&self, column_name: &str) -> Result<Vec<f64>> {
        self.get_column(column_name)?.to_f64()
    }

    /// Create a new Frame keeping only the rows at the given positions
    ///
    /// Rows appear in the order of `indices`; a position may not exceed the
    /// row count. All columns are carried over.
    pub fn take_rows(&self, indices: &[usize]) -> Result<Frame> {
        let mut result = Frame::new();
        for column_name in &self.column_order {
            let series = self.columns[column_name].take(indices)?;
            result.add_column(column_name.clone(), series)?;
        }
        // A column-less frame still reports how many rows were taken
        if self.column_order.is_empty() {
            result.row_count = indices.len();
        }
        Ok(result)
    }
}
