use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{
    OsmNodeData, OsmNodeId, OsmNodes, OsmRelationData, OsmRelationId, OsmRelations, OsmWayData,
    OsmWayId, OsmWays,
};
use crate::model::osm::OsmError;

/// read-only view over the nodes, ways and relations of one OSM dataset.
///
/// built once after ingestion and shared by reference during assembly. nodes and
/// ways are keyed by OSMID, relations keep their declaration order.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct OsmEntityGraph {
    nodes: OsmNodes,
    ways: OsmWays,
    relations: OsmRelations,
}

impl OsmEntityGraph {
    /// collects the ingested elements into a graph. a repeated OSMID replaces
    /// the earlier element with that id, keeping the earlier relation's position.
    pub fn new(
        nodes: Vec<OsmNodeData>,
        ways: Vec<OsmWayData>,
        relations: Vec<OsmRelationData>,
    ) -> OsmEntityGraph {
        let mut nodes_map = OsmNodes::new();
        for node in nodes {
            if nodes_map.contains_key(&node.osmid) {
                log::warn!(
                    "node with OSMID {} occurs more than once in this dataset",
                    node.osmid
                );
            }
            nodes_map.insert(node.osmid, node);
        }

        let mut ways_map = OsmWays::new();
        for way in ways {
            if ways_map.contains_key(&way.osmid) {
                log::warn!(
                    "way with OSMID {} occurs more than once in this dataset",
                    way.osmid
                );
            }
            ways_map.insert(way.osmid, way);
        }

        let mut relations_vec: OsmRelations = Vec::with_capacity(relations.len());
        let mut relation_positions: HashMap<OsmRelationId, usize> = HashMap::new();
        for relation in relations {
            match relation_positions.get(&relation.osmid) {
                Some(idx) => {
                    log::warn!(
                        "relation with OSMID {} occurs more than once in this dataset",
                        relation.osmid
                    );
                    relations_vec[*idx] = relation;
                }
                None => {
                    relation_positions.insert(relation.osmid, relations_vec.len());
                    relations_vec.push(relation);
                }
            }
        }

        OsmEntityGraph {
            nodes: nodes_map,
            ways: ways_map,
            relations: relations_vec,
        }
    }

    pub fn nodes(&self) -> &OsmNodes {
        &self.nodes
    }

    pub fn ways(&self) -> &OsmWays {
        &self.ways
    }

    pub fn relations(&self) -> &[OsmRelationData] {
        &self.relations
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_ways(&self) -> usize {
        self.ways.len()
    }

    pub fn n_relations(&self) -> usize {
        self.relations.len()
    }

    pub fn get_node_data(&self, node_id: &OsmNodeId) -> Option<&OsmNodeData> {
        self.nodes.get(node_id)
    }

    pub fn get_way_data(&self, way_id: &OsmWayId) -> Result<&OsmWayData, OsmError> {
        self.ways
            .get(way_id)
            .ok_or(OsmError::GraphMissingWayId(*way_id))
    }

    /// splits the way ids into (closed, open) sets by comparing the first and
    /// last node reference of each way. both are in ascending OSMID order.
    pub fn split_ways_by_closure(&self) -> (Vec<OsmWayId>, Vec<OsmWayId>) {
        let (closed, open): (Vec<&OsmWayData>, Vec<&OsmWayData>) =
            self.ways.values().partition(|w| w.is_closed());
        (
            closed.into_iter().map(|w| w.osmid).collect(),
            open.into_iter().map(|w| w.osmid).collect(),
        )
    }
}
