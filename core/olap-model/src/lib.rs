//! FILENAME: core/olap-model/src/lib.rs
//! PURPOSE: Data model for executed OLAP cross-tab results.
//! CONTEXT: Shared by layouts that turn a result set into front-end output.
//! Layouts depend on the `ResultSet` trait only; `MemoryResultSet` is the
//! owned implementation used by callers that already hold the data.

pub mod cell;
pub mod member;
pub mod result_set;

// Re-export commonly used types at the crate root
pub use cell::{Cell, CellValue};
pub use member::{Member, Tuple};
pub use result_set::{MemoryResultSet, ResultSet};
