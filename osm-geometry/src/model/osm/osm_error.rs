use thiserror::Error;

use super::graph::{OsmEntityKind, OsmNodeId, OsmRelationId, OsmWayId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OsmError {
    #[error("node '{node}' referenced by way '{way}' not found in node list")]
    MissingNode { way: OsmWayId, node: OsmNodeId },
    #[error("way '{way}' referenced by relation '{relation}' not found in way list")]
    MissingWay {
        relation: OsmRelationId,
        way: OsmWayId,
    },
    #[error("attempting to trace way '{0}' not in graph")]
    GraphMissingWayId(OsmWayId),
    #[error("member way '{way}' of multipolygon relation '{relation}' does not form a closed ring")]
    UnclosedRing {
        relation: OsmRelationId,
        way: OsmWayId,
    },
    #[error("closed way '{0}' no longer forms a ring after tracing")]
    UnclosedPolygon(OsmWayId),
    #[error("{kind} '{entity}' has tag key '{key}' missing from the {kind} key set")]
    UnknownKey {
        kind: OsmEntityKind,
        key: String,
        entity: String,
    },
    #[error("structural mismatch in {collection}: expected length {expected}, found {found}")]
    StructuralMismatch {
        collection: String,
        expected: usize,
        found: usize,
    },
    #[error("row {index} of {collection} is misaligned: geometry '{geometry_label}' paired with attribute row '{row_label}'")]
    MisalignedRow {
        collection: String,
        index: usize,
        geometry_label: String,
        row_label: String,
    },
    #[error("unsupported geometry kind '{0}', must be one of points, lines, polygons, multipolygons, multilinestrings")]
    UnsupportedGeometryKind(String),
    #[error("invalid conversion argument: {0}")]
    InvalidArgument(String),
    #[error("{0}")]
    InternalError(String),
}

impl OsmError {
    /// true for failures scoped to a single way, member, ring or relation.
    /// these are reported as warnings and the affected entity is dropped
    /// from the output; every other error aborts the conversion.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            OsmError::MissingNode { .. }
                | OsmError::MissingWay { .. }
                | OsmError::GraphMissingWayId(_)
                | OsmError::UnclosedRing { .. }
                | OsmError::UnclosedPolygon(_)
        )
    }
}
