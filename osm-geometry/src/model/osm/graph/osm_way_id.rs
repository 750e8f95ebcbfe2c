use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// OSMID of a way element. also used to tag each traced vertex with the
/// relation member it was resolved through.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
#[serde(transparent)]
pub struct OsmWayId(pub i64);

impl Display for OsmWayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OsmWayId {
    fn from(value: i64) -> Self {
        OsmWayId(value)
    }
}
