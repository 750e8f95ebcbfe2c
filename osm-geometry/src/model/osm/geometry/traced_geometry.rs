use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

use crate::model::osm::{
    graph::{OsmNodeId, OsmWayId},
    OsmError,
};

/// one resolved position of a traced way: the coordinate, the node it was
/// resolved from (its row label) and the way it was traced through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracedVertex {
    pub coord: Coord<f64>,
    pub node: OsmNodeId,
    pub member: OsmWayId,
}

impl TracedVertex {
    pub fn new(coord: Coord<f64>, node: OsmNodeId, member: OsmWayId) -> TracedVertex {
        TracedVertex {
            coord,
            node,
            member,
        }
    }
}

/// an ordered coordinate sequence with its row labels and member ids.
///
/// the three sequences are stored as one vector of [`TracedVertex`] records so
/// they can only ever grow and shrink together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TracedGeometry {
    vertices: Vec<TracedVertex>,
}

impl TracedGeometry {
    pub fn new() -> TracedGeometry {
        TracedGeometry { vertices: vec![] }
    }

    pub fn from_vertices(vertices: Vec<TracedVertex>) -> TracedGeometry {
        TracedGeometry { vertices }
    }

    /// builds a geometry from separately collected coordinates, labels and
    /// member ids, which must all have the same length.
    pub fn try_from_parts(
        coords: Vec<Coord<f64>>,
        labels: Vec<OsmNodeId>,
        members: Vec<OsmWayId>,
    ) -> Result<TracedGeometry, OsmError> {
        if labels.len() != coords.len() {
            return Err(OsmError::StructuralMismatch {
                collection: String::from("traced geometry row labels"),
                expected: coords.len(),
                found: labels.len(),
            });
        }
        if members.len() != coords.len() {
            return Err(OsmError::StructuralMismatch {
                collection: String::from("traced geometry member ids"),
                expected: coords.len(),
                found: members.len(),
            });
        }
        let vertices = coords
            .into_iter()
            .zip(labels)
            .zip(members)
            .map(|((coord, node), member)| TracedVertex::new(coord, node, member))
            .collect();
        Ok(TracedGeometry { vertices })
    }

    pub fn push(&mut self, vertex: TracedVertex) {
        self.vertices.push(vertex);
    }

    /// concatenates another geometry onto the end of this one, as-is.
    pub fn append(&mut self, mut other: TracedGeometry) {
        self.vertices.append(&mut other.vertices);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[TracedVertex] {
        &self.vertices
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord<f64>> + '_ {
        self.vertices.iter().map(|v| v.coord)
    }

    /// the row label of each coordinate, which is its node OSMID
    pub fn labels(&self) -> Vec<String> {
        self.vertices.iter().map(|v| v.node.to_string()).collect()
    }

    pub fn member_ids(&self) -> Vec<OsmWayId> {
        self.vertices.iter().map(|v| v.member).collect()
    }

    /// true when the first and last vertex were resolved from the same node
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(head), Some(tail)) => self.vertices.len() > 1 && head.node == tail.node,
            _ => false,
        }
    }

    pub fn to_linestring(&self) -> LineString<f64> {
        LineString::new(self.coords().collect())
    }
}
