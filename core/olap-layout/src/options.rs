//! FILENAME: core/olap-layout/src/options.rs
//! Layout options - how a result set is turned into records.
//!
//! Options are plain serializable values so a caller can pass them through
//! from a request body unchanged. Every field has a default; an empty JSON
//! object yields the soft, compact behavior.

use serde::{Deserialize, Serialize};
use crate::error::LayoutError;

/// Behavior switches for `JsonLayout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Fail with `LayoutError::MissingCell` when the cell buffer is shorter
    /// than the axes require. When false, missing cells become null.
    pub strict: bool,

    /// Pretty-print the generated JSON.
    pub pretty: bool,
}

impl LayoutOptions {
    pub fn strict() -> Self {
        LayoutOptions {
            strict: true,
            ..Self::default()
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Parses options from a JSON object such as `{"strict": true}`.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}
