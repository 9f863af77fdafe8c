//! FILENAME: core/olap-layout/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Missing cell for row {row}, column {column}: offset {offset} is outside a buffer of {len} cells")]
    MissingCell {
        row: usize,
        column: usize,
        offset: usize,
        len: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
