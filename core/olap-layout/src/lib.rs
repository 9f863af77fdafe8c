//! FILENAME: core/olap-layout/src/lib.rs
//! Flat-record layouts for OLAP cross-tab results.
//!
//! This crate turns an executed cross-tab (row axis, column axis, row-major
//! cell buffer) into an ordered sequence of flat records keyed by friendly
//! field names, ready for JSON-consuming dashboards. It depends on
//! `olap-model` for the result-set types.
//!
//! Layers:
//! - `naming`: Qualified member name -> flat identifier
//! - `axis`: Column names and row headers, derived once per result set
//! - `record`: Ordered record type and the per-row builder
//! - `layout`: Flattening and JSON rendering
//! - `options`: Serializable behavior switches
//! - `error`: Strict-mode and JSON encoding failures

pub mod naming;
pub mod axis;
pub mod record;
pub mod layout;
pub mod options;
pub mod error;

pub use naming::friendly_name;
pub use axis::{AxisReader, RowHeader};
pub use record::{Record, RecordBuilder};
pub use layout::{flatten, JsonLayout, Layout};
pub use options::LayoutOptions;
pub use error::LayoutError;
