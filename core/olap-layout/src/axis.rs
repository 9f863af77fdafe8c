//! FILENAME: core/olap-layout/src/axis.rs
//! Axis reader - derives flat column names and row headers from a result set.
//!
//! Both derivations are computed on first access and cached for the life of
//! the reader. A reader belongs to one formatting request; it is never shared
//! across threads or reused for another result set.

use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use olap_model::{ResultSet, Tuple};
use crate::naming::friendly_name;

/// One header field of a row: the flattened level name and the member caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowHeader {
    pub name: String,
    pub caption: String,
}

impl RowHeader {
    pub fn new(name: impl Into<String>, caption: impl Into<String>) -> Self {
        RowHeader {
            name: name.into(),
            caption: caption.into(),
        }
    }
}

pub struct AxisReader<'a, R: ResultSet + ?Sized> {
    result_set: &'a R,
    columns: OnceCell<Vec<String>>,
    rows: OnceCell<Vec<Vec<RowHeader>>>,
}

impl<'a, R: ResultSet + ?Sized> AxisReader<'a, R> {
    pub fn new(result_set: &'a R) -> Self {
        AxisReader {
            result_set,
            columns: OnceCell::new(),
            rows: OnceCell::new(),
        }
    }

    pub fn result_set(&self) -> &'a R {
        self.result_set
    }

    /// Flattened unique names of the column positions, in axis order.
    ///
    /// Only the first member of each column tuple is read. Duplicates are
    /// kept as-is. A tuple with no members yields an empty name.
    pub fn columns(&self) -> &[String] {
        self.columns.get_or_init(|| {
            self.result_set
                .col_axis_set()
                .iter()
                .map(column_name)
                .collect()
        })
    }

    /// Header fields of every row position, in axis order.
    pub fn rows(&self) -> &[Vec<RowHeader>] {
        self.rows.get_or_init(|| {
            self.result_set
                .row_axis_set()
                .iter()
                .map(row_headers)
                .collect()
        })
    }
}

fn column_name(tuple: &Tuple) -> String {
    tuple
        .first()
        .map(|member| friendly_name(member.unique_name()))
        .unwrap_or_default()
}

fn row_headers(tuple: &Tuple) -> Vec<RowHeader> {
    tuple
        .iter()
        .map(|member| RowHeader {
            name: friendly_name(member.level_unique_name()),
            caption: member.caption().to_string(),
        })
        .collect()
}
