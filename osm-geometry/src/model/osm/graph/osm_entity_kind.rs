use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the three OSM element types. each kind owns its own attribute key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OsmEntityKind {
    Node,
    Way,
    Relation,
}

impl Display for OsmEntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsmEntityKind::Node => write!(f, "node"),
            OsmEntityKind::Way => write!(f, "way"),
            OsmEntityKind::Relation => write!(f, "relation"),
        }
    }
}
