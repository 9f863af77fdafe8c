//! FILENAME: core/olap-model/src/cell.rs
//! PURPOSE: Defines a single cell of the cross-tab data block.
//! CONTEXT: This file contains the `Cell` struct and `CellValue` enum.
//! A result set stores its cells in one linear, row-major buffer, so
//! these are kept small and cheap to clone.

use serde::{Deserialize, Serialize};

/// The scalar held by a cell, or nothing.
///
/// Serialized untagged so a cell lands in JSON as its bare scalar:
/// `Empty` becomes `null`, integers stay integers. Integers above
/// `i64::MAX` land in `Unsigned`; only non-integral or out-of-`u64` numbers
/// become `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Boolean(bool),
    Integer(i64),
    Unsigned(u64),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        CellValue::Unsigned(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// One entry of the data block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,

    /// Server-side formatted rendering of `value` (e.g. "$1,200.00"), if the
    /// engine supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
}

impl Cell {
    pub fn new(value: impl Into<CellValue>) -> Self {
        Cell {
            value: value.into(),
            formatted_value: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_formatted(mut self, formatted: impl Into<String>) -> Self {
        self.formatted_value = Some(formatted.into());
        self
    }

    /// The cell's raw value.
    pub fn value(&self) -> &CellValue {
        &self.value
    }
}
