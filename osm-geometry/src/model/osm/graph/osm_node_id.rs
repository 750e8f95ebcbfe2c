use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// OSMID of a node element.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
#[serde(transparent)]
pub struct OsmNodeId(pub i64);

impl Display for OsmNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OsmNodeId {
    fn from(value: i64) -> Self {
        OsmNodeId(value)
    }
}
