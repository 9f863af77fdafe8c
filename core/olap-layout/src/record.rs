//! FILENAME: core/olap-layout/src/record.rs
//! Records - the flat, ordered rows a layout emits.
//!
//! A record is one row position of the cross-tab: its header fields first,
//! in row-tuple order, then one field per column, in column order. Keys are
//! unique; inserting an existing key replaces the value but keeps the key in
//! its original position.

use std::convert::Infallible;
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use olap_model::{Cell, CellValue};
use crate::axis::RowHeader;
use crate::error::LayoutError;
use crate::naming::friendly_name;

// ============================================================================
// RECORD
// ============================================================================

/// Insertion-ordered map from field name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
    index: FxHashMap<String, usize>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Record {
            fields: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Sets `key` to `value`. Returns the replaced value if the key was
    /// already present; its position does not change.
    pub fn insert(&mut self, key: impl Into<String>, value: CellValue) -> Option<CellValue> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.fields[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.fields.len());
                self.fields.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.index.get(key).map(|&pos| &self.fields[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ============================================================================
// RECORD BUILDER
// ============================================================================

/// Assembles the record for one row position from the derived axes and the
/// row-major cell buffer.
pub struct RecordBuilder<'a> {
    rows: &'a [Vec<RowHeader>],
    columns: &'a [String],
    cells: &'a [Cell],
}

impl<'a> RecordBuilder<'a> {
    pub fn new(rows: &'a [Vec<RowHeader>], columns: &'a [String], cells: &'a [Cell]) -> Self {
        RecordBuilder { rows, columns, cells }
    }

    /// Builds the record for `row_index`. A cell past the end of the buffer
    /// reads as null.
    ///
    /// # Panics
    /// If `row_index >= rows.len()`.
    pub fn build(&self, row_index: usize) -> Record {
        let assembled = self.assemble(row_index, |column, offset| {
            log::trace!(
                "row {} column {}: offset {} past {} cells, using null",
                row_index, column, offset, self.cells.len()
            );
            Ok::<_, Infallible>(CellValue::Empty)
        });
        match assembled {
            Ok(record) => record,
            Err(never) => match never {},
        }
    }

    /// Like `build`, but a cell past the end of the buffer is an error.
    ///
    /// # Panics
    /// If `row_index >= rows.len()`.
    pub fn try_build(&self, row_index: usize) -> Result<Record, LayoutError> {
        self.assemble(row_index, |column, offset| {
            log::warn!(
                "row {} column {}: offset {} past {} cells",
                row_index, column, offset, self.cells.len()
            );
            Err(LayoutError::MissingCell {
                row: row_index,
                column,
                offset,
                len: self.cells.len(),
            })
        })
    }

    fn assemble<E>(
        &self,
        row_index: usize,
        mut on_missing: impl FnMut(usize, usize) -> Result<CellValue, E>,
    ) -> Result<Record, E> {
        let headers = &self.rows[row_index];
        let mut record = Record::with_capacity(headers.len() + self.columns.len());

        for header in headers {
            record.insert(friendly_name(&header.name), CellValue::Text(header.caption.clone()));
        }

        let row_offset = self.columns.len() * row_index;
        for (column, name) in self.columns.iter().enumerate() {
            let offset = row_offset + column;
            let value = match self.cells.get(offset) {
                Some(cell) => cell.value.clone(),
                None => on_missing(column, offset)?,
            };
            record.insert(name.as_str(), value);
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> Vec<RowHeader> {
        pairs.iter().map(|(n, c)| RowHeader::new(*n, *c)).collect()
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn cells(values: &[i64]) -> Vec<Cell> {
        values.iter().map(|&v| Cell::new(v)).collect()
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut record = Record::new();
        assert_eq!(record.insert("a", CellValue::Integer(1)), None);
        record.insert("b", CellValue::Integer(2));
        assert_eq!(record.insert("a", CellValue::Integer(3)), Some(CellValue::Integer(1)));

        assert_eq!(record.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(record.get("a"), Some(&CellValue::Integer(3)));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let record: Record = vec![
            ("zeta".to_string(), CellValue::text("z")),
            ("alpha".to_string(), CellValue::Integer(1)),
            ("mid".to_string(), CellValue::Empty),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"zeta":"z","alpha":1,"mid":null}"#);
    }

    #[test]
    fn headers_precede_data_fields() {
        let rows = vec![
            headers(&[("store", "CA"), ("product", "Food")]),
            headers(&[("store", "NY"), ("product", "Drink")]),
        ];
        let cols = columns(&["sales", "profit"]);
        let buffer = cells(&[100, 10, 200, 20]);
        let builder = RecordBuilder::new(&rows, &cols, &buffer);

        let record = builder.build(1);
        assert_eq!(record.keys().collect::<Vec<_>>(), ["store", "product", "sales", "profit"]);
        assert_eq!(record.get("store"), Some(&CellValue::text("NY")));
        assert_eq!(record.get("sales"), Some(&CellValue::Integer(200)));
        assert_eq!(record.get("profit"), Some(&CellValue::Integer(20)));
    }

    #[test]
    fn header_names_are_normalized_again() {
        let rows = vec![headers(&[("[Store].[State]", "CA")])];
        let builder = RecordBuilder::new(&rows, &[], &[]);
        let record = builder.build(0);
        assert_eq!(record.get("store_state"), Some(&CellValue::text("CA")));
    }

    #[test]
    fn missing_cells_read_as_null() {
        let rows = vec![headers(&[("store", "CA")]), headers(&[("store", "NY")])];
        let cols = columns(&["sales", "profit"]);
        let buffer = cells(&[100, 10, 200]);
        let builder = RecordBuilder::new(&rows, &cols, &buffer);

        let first = builder.build(0);
        assert_eq!(first.get("profit"), Some(&CellValue::Integer(10)));

        let last = builder.build(1);
        assert_eq!(last.get("sales"), Some(&CellValue::Integer(200)));
        assert_eq!(last.get("profit"), Some(&CellValue::Empty));
    }

    #[test]
    fn strict_build_reports_missing_cell() {
        let rows = vec![headers(&[("store", "CA")]), headers(&[("store", "NY")])];
        let cols = columns(&["sales", "profit"]);
        let buffer = cells(&[100, 10, 200]);
        let builder = RecordBuilder::new(&rows, &cols, &buffer);

        assert!(builder.try_build(0).is_ok());
        match builder.try_build(1) {
            Err(LayoutError::MissingCell { row, column, offset, len }) => {
                assert_eq!((row, column, offset, len), (1, 1, 3, 3));
            }
            other => panic!("expected MissingCell, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_column_names_keep_last_value() {
        let rows = vec![headers(&[("store", "CA")])];
        let cols = columns(&["total", "total"]);
        let buffer = cells(&[1, 2]);
        let record = RecordBuilder::new(&rows, &cols, &buffer).build(0);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("total"), Some(&CellValue::Integer(2)));
    }

    #[test]
    fn column_may_overwrite_header_field() {
        let rows = vec![headers(&[("sales", "label")])];
        let cols = columns(&["sales"]);
        let buffer = cells(&[5]);
        let record = RecordBuilder::new(&rows, &cols, &buffer).build(0);

        assert_eq!(record.keys().collect::<Vec<_>>(), ["sales"]);
        assert_eq!(record.get("sales"), Some(&CellValue::Integer(5)));
    }

    #[test]
    #[should_panic]
    fn row_index_out_of_range_panics() {
        let rows: Vec<Vec<RowHeader>> = Vec::new();
        RecordBuilder::new(&rows, &[], &[]).build(0);
    }
}
