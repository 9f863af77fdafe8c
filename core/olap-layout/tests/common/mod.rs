//! FILENAME: tests/common/mod.rs
//! Result-set fixtures shared by the layout integration tests.

#![allow(dead_code)]

use olap_model::{Cell, MemoryResultSet, Member};

/// Store sales by state and product family, measures on columns.
pub struct StoreSalesFixture;

impl StoreSalesFixture {
    pub fn measures() -> Vec<&'static str> {
        vec!["Unit Sales", "Store Cost", "Store Sales"]
    }

    pub fn data() -> Vec<(&'static str, &'static str, i64, f64, f64)> {
        vec![
            ("CA", "Drink", 7102, 5937.55, 14869.17),
            ("CA", "Food", 53656, 45234.53, 113478.09),
            ("OR", "Drink", 6106, 5182.27, 12838.42),
            ("OR", "Food", 48277, 40762.29, 101815.02),
            ("WA", "Drink", 11389, 9610.97, 24017.17),
            ("WA", "Food", 89415, 75446.43, 188773.79),
        ]
    }

    pub fn result_set() -> MemoryResultSet {
        let mut rs = MemoryResultSet::new();
        for measure in Self::measures() {
            rs.push_column([measure_member(measure)]);
        }
        for (state, family, units, cost, sales) in Self::data() {
            rs.push_row([
                Member::new(
                    format!("[Store].[USA].[{}]", state),
                    "[Store].[Store State]",
                    state,
                ),
                Member::new(
                    format!("[Product].[{}]", family),
                    "[Product].[Product Family]",
                    family,
                ),
            ]);
            rs.push_value(units).push_value(cost).push_value(sales);
        }
        rs
    }
}

pub fn measure_member(name: &str) -> Member {
    Member::new(
        format!("[Measures].[{}]", name),
        "[Measures].[MeasuresLevel]",
        name,
    )
}

/// A single-level row axis with one member per row.
pub fn simple_result_set(row_captions: &[&str], columns: &[&str], values: &[Option<i64>]) -> MemoryResultSet {
    let mut rs = MemoryResultSet::new();
    for column in columns {
        rs.push_column([Member::new(*column, "[Measures].[MeasuresLevel]", *column)]);
    }
    for caption in row_captions {
        rs.push_row([Member::new(format!("[Store].[{}]", caption), "[Store]", *caption)]);
    }
    for value in values {
        rs.push_cell(Cell::new(*value));
    }
    rs
}
