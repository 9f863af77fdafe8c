//! FILENAME: core/olap-layout/src/layout.rs
//! Layouts - render a whole result set for the frontend.
//!
//! `JsonLayout` walks the row positions in order, builds one record per row
//! and hands the sequence to serde_json. One layout serves one result set
//! for one request; its axis caches are never invalidated.
//!
//! Flattening is O(rows x columns) and performs no validation of the buffer
//! length against the axes beyond what `LayoutOptions::strict` asks for.

use serde::Serialize;
use olap_model::ResultSet;
use crate::axis::AxisReader;
use crate::error::LayoutError;
use crate::options::LayoutOptions;
use crate::record::{Record, RecordBuilder};

/// A textual rendering of a result set.
pub trait Layout {
    fn generate(&self) -> Result<String, LayoutError>;
}

/// Flattens a result set into records, missing cells reading as null.
pub fn flatten<R: ResultSet + ?Sized>(result_set: &R) -> Vec<Record> {
    let axes = AxisReader::new(result_set);
    let builder = record_builder(&axes);
    (0..axes.rows().len()).map(|row| builder.build(row)).collect()
}

fn record_builder<'r, R: ResultSet + ?Sized>(axes: &'r AxisReader<'_, R>) -> RecordBuilder<'r> {
    let rows = axes.rows();
    let columns = axes.columns();
    let cells = axes.result_set().data_set();
    log::debug!(
        "flattening {} rows x {} columns over {} cells",
        rows.len(),
        columns.len(),
        cells.len()
    );
    RecordBuilder::new(rows, columns, cells)
}

// ============================================================================
// JSON LAYOUT
// ============================================================================

/// Renders a result set as a JSON array of flat objects.
pub struct JsonLayout<'a, R: ResultSet + ?Sized> {
    axes: AxisReader<'a, R>,
    options: LayoutOptions,
}

impl<'a, R: ResultSet + ?Sized> JsonLayout<'a, R> {
    pub fn new(result_set: &'a R) -> Self {
        Self::with_options(result_set, LayoutOptions::default())
    }

    pub fn with_options(result_set: &'a R, options: LayoutOptions) -> Self {
        JsonLayout {
            axes: AxisReader::new(result_set),
            options,
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Flattened column names, in axis order.
    pub fn columns(&self) -> &[String] {
        self.axes.columns()
    }

    /// One record per row position, in axis order.
    pub fn records(&self) -> Result<Vec<Record>, LayoutError> {
        let builder = record_builder(&self.axes);
        let row_count = self.axes.rows().len();

        if self.options.strict {
            (0..row_count).map(|row| builder.try_build(row)).collect()
        } else {
            Ok((0..row_count).map(|row| builder.build(row)).collect())
        }
    }

    /// The records as a `serde_json::Value` array, keys in record order.
    pub fn to_value(&self) -> Result<serde_json::Value, LayoutError> {
        Ok(serde_json::to_value(self.records()?)?)
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<String, LayoutError> {
        let json = if self.options.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl<'a, R: ResultSet + ?Sized> Layout for JsonLayout<'a, R> {
    fn generate(&self) -> Result<String, LayoutError> {
        let records = self.records()?;
        self.encode(&records)
    }
}
