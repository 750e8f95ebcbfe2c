use std::fmt::Display;

use crate::model::osm::{geometry::OsmGeometryKind, OsmError};

/// a recoverable failure that removed (or flagged) an entity of one collection
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionWarning {
    pub kind: OsmGeometryKind,
    pub error: OsmError,
}

impl ConversionWarning {
    pub fn new(kind: OsmGeometryKind, error: OsmError) -> ConversionWarning {
        ConversionWarning { kind, error }
    }
}

impl Display for ConversionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.error)
    }
}
