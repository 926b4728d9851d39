// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tabular view over interpreted records.
//!
//! A [`Table`] is an ordered list of rows plus the union of their keys, in
//! first-seen order. A row that lacks a column holds `None` in that cell, so
//! an absent field is never confused with a present zero or empty value.
//! Values are not coerced: a column may hold a list in one row and a scalar
//! in another.

use indexmap::IndexSet;
use serde::Serialize;

use crate::core::{Interpreted, Record, Value};

/// Rows of optional cells aligned to a column set.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<Value>>>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a sequence of records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut columns: IndexSet<String> = IndexSet::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.insert(key.clone());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|column| record.swap_remove(column))
                    .collect()
            })
            .collect();

        Self {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    /// Build a table from an interpreter result.
    pub fn from_interpreted(result: Interpreted) -> Self {
        Self::from_records(result.into_rows())
    }

    /// Column names in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows of cells aligned with [`columns`](Self::columns).
    pub fn rows(&self) -> &[Vec<Option<Value>>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Get a cell; `None` when the row or column does not exist or the
    /// record did not carry that key.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)?.as_ref()
    }

    /// Iterate over the cells of one column.
    pub fn column(&self, column: &str) -> Option<impl Iterator<Item = Option<&Value>>> {
        let index = self.column_index(column)?;
        Some(self.rows.iter().map(move |row| row[index].as_ref()))
    }

    /// Re-materialize rows as records, omitting absent cells.
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .filter_map(|(column, cell)| {
                        cell.as_ref().map(|value| (column.clone(), value.clone()))
                    })
                    .collect()
            })
            .collect()
    }

    /// Append all rows of another table, widening the column set.
    pub fn extend(&mut self, other: Table) {
        let mapping: Vec<usize> = other
            .columns
            .into_iter()
            .map(|column| match self.column_index(&column) {
                Some(index) => index,
                None => {
                    self.columns.push(column);
                    self.columns.len() - 1
                }
            })
            .collect();

        let width = self.columns.len();
        for row in &mut self.rows {
            row.resize(width, None);
        }
        for row in other.rows {
            let mut aligned = vec![None; width];
            for (cell, index) in row.into_iter().zip(&mapping) {
                aligned[*index] = cell;
            }
            self.rows.push(aligned);
        }
    }
}

/// Normalize an interpreter result into a table.
pub fn tabularize(result: Interpreted) -> Table {
    Table::from_interpreted(result)
}
