mod osm_entity_graph;
mod osm_entity_kind;
pub mod osm_node_data;
mod osm_node_id;
pub mod osm_relation_data;
mod osm_relation_id;
pub mod osm_way_data;
mod osm_way_id;
pub mod unique_vals;

#[cfg(test)]
pub mod test_graph;

pub use osm_entity_graph::OsmEntityGraph;
pub use osm_entity_kind::OsmEntityKind;
pub use osm_node_data::OsmNodeData;
pub use osm_node_id::OsmNodeId;
pub use osm_relation_data::{OsmRelationData, RelationMember};
pub use osm_relation_id::OsmRelationId;
pub use osm_way_data::OsmWayData;
pub use osm_way_id::OsmWayId;
pub use unique_vals::{KeyIndex, UniqueVals};

use std::collections::BTreeMap;

/// free-form OSM tags. keys are unique per element and iterate in sorted order.
pub type OsmTags = BTreeMap<String, String>;

// ordered maps so that every traversal of the graph emits entities in ascending OSMID order
pub type OsmNodes = BTreeMap<OsmNodeId, OsmNodeData>;
pub type OsmWays = BTreeMap<OsmWayId, OsmWayData>;
pub type OsmRelations = Vec<OsmRelationData>;
