use itertools::Itertools;

use super::MissingNodePolicy;
use crate::model::osm::{
    geometry::{TracedGeometry, TracedVertex},
    graph::{OsmEntityGraph, OsmNodeId, OsmNodes, OsmWayData, OsmWayId},
    OsmError,
};

/// the result of tracing one way
#[derive(Debug, Clone, PartialEq)]
pub struct WayTrace {
    pub way: OsmWayId,
    pub geometry: TracedGeometry,
    /// node references dropped under [`MissingNodePolicy::Skip`], in path order
    pub skipped: Vec<OsmNodeId>,
}

impl WayTrace {
    /// a missing node error for every skipped node reference
    pub fn skipped_errors(&self) -> Vec<OsmError> {
        self.skipped
            .iter()
            .map(|node| OsmError::MissingNode {
                way: self.way,
                node: *node,
            })
            .collect()
    }
}

/// resolves a way by id and traces it, see [`trace_way_data`].
pub fn trace_way(
    way_id: &OsmWayId,
    graph: &OsmEntityGraph,
    policy: MissingNodePolicy,
) -> Result<WayTrace, OsmError> {
    let way = graph.get_way_data(way_id)?;
    trace_way_data(way, graph.nodes(), policy)
}

/// resolves the node references of a way to coordinates, in path order. each
/// vertex is labelled with its node OSMID and tagged with the way's OSMID.
/// ring closure is not checked here.
pub fn trace_way_data(
    way: &OsmWayData,
    nodes: &OsmNodes,
    policy: MissingNodePolicy,
) -> Result<WayTrace, OsmError> {
    let mut skipped: Vec<OsmNodeId> = vec![];
    let vertices = way
        .nodes
        .iter()
        .map(|id| match nodes.get(id) {
            Some(node) => Ok(Some(TracedVertex::new(node.get_coord(), *id, way.osmid))),
            None if policy == MissingNodePolicy::Skip => {
                skipped.push(*id);
                Ok(None)
            }
            None => Err(OsmError::MissingNode {
                way: way.osmid,
                node: *id,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect_vec();

    if !skipped.is_empty() {
        log::warn!(
            "way {} skipped {} missing node(s): {}",
            way.osmid,
            skipped.len(),
            skipped.iter().join(", ")
        );
    }

    Ok(WayTrace {
        way: way.osmid,
        geometry: TracedGeometry::from_vertices(vertices),
        skipped,
    })
}
