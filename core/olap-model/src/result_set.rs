//! FILENAME: core/olap-model/src/result_set.rs
//! PURPOSE: The cross-tab result a query engine hands to a layout.
//! CONTEXT: `ResultSet` is the read-only view layouts consume. The data block
//! is one linear buffer in row-major order: cell `(row, col)` lives at
//! `row * column_count + col`. Nothing here checks that the buffer length
//! matches the axes; consumers decide how to treat a short buffer.

use serde::{Deserialize, Serialize};
use crate::cell::{Cell, CellValue};
use crate::member::{Member, Tuple};

/// Read access to an executed cross-tab.
pub trait ResultSet {
    /// Column-axis positions, in axis order.
    fn col_axis_set(&self) -> &[Tuple];

    /// Row-axis positions, in axis order.
    fn row_axis_set(&self) -> &[Tuple];

    /// The row-major cell buffer.
    fn data_set(&self) -> &[Cell];
}

impl<R: ResultSet + ?Sized> ResultSet for &R {
    fn col_axis_set(&self) -> &[Tuple] {
        (**self).col_axis_set()
    }

    fn row_axis_set(&self) -> &[Tuple] {
        (**self).row_axis_set()
    }

    fn data_set(&self) -> &[Cell] {
        (**self).data_set()
    }
}

// ============================================================================
// IN-MEMORY RESULT SET
// ============================================================================

/// An owned result set, built in code or deserialized from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryResultSet {
    #[serde(default)]
    pub column_axis: Vec<Tuple>,

    #[serde(default)]
    pub row_axis: Vec<Tuple>,

    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl MemoryResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a result set from its JSON form:
    /// `{"column_axis": [[member..]..], "row_axis": [[member..]..], "cells": [..]}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Appends a column position.
    pub fn push_column(&mut self, members: impl IntoIterator<Item = Member>) -> &mut Self {
        self.column_axis.push(members.into_iter().collect());
        self
    }

    /// Appends a row position.
    pub fn push_row(&mut self, members: impl IntoIterator<Item = Member>) -> &mut Self {
        self.row_axis.push(members.into_iter().collect());
        self
    }

    /// Appends the next cell in row-major order.
    pub fn push_cell(&mut self, cell: Cell) -> &mut Self {
        self.cells.push(cell);
        self
    }

    /// Appends a bare value as the next cell.
    pub fn push_value(&mut self, value: impl Into<CellValue>) -> &mut Self {
        self.push_cell(Cell::new(value))
    }

    pub fn column_count(&self) -> usize {
        self.column_axis.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_axis.len()
    }
}

impl ResultSet for MemoryResultSet {
    fn col_axis_set(&self) -> &[Tuple] {
        &self.column_axis
    }

    fn row_axis_set(&self) -> &[Tuple] {
        &self.row_axis
    }

    fn data_set(&self) -> &[Cell] {
        &self.cells
    }
}
