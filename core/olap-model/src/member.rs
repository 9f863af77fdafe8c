//! FILENAME: core/olap-model/src/member.rs
//! PURPOSE: Dimension members and the axis tuples built from them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A node in a dimension hierarchy, e.g. `[Store].[USA].[CA]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Qualified name in bracket/dot syntax.
    pub unique_name: String,

    /// Qualified name of the hierarchy level the member sits on,
    /// e.g. `[Store].[Store State]`.
    pub level_unique_name: String,

    /// Human-readable label.
    pub caption: String,
}

impl Member {
    pub fn new(
        unique_name: impl Into<String>,
        level_unique_name: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Member {
            unique_name: unique_name.into(),
            level_unique_name: level_unique_name.into(),
            caption: caption.into(),
        }
    }

    pub fn unique_name(&self) -> &str {
        &self.unique_name
    }

    pub fn level_unique_name(&self) -> &str {
        &self.level_unique_name
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// One position along an axis: one member per nested level.
/// Axes rarely nest more than a couple of levels deep.
pub type Tuple = SmallVec<[Member; 2]>;
