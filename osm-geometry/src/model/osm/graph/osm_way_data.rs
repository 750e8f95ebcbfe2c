use serde::{Deserialize, Serialize};

use super::{OsmNodeId, OsmTags, OsmWayId};

/// an OSM way. the order of `nodes` is the geometric order of the path.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmWayData {
    pub osmid: OsmWayId,
    pub nodes: Vec<OsmNodeId>,
    #[serde(default)]
    pub tags: OsmTags,
}

impl OsmWayData {
    pub fn new(osmid: OsmWayId, nodes: Vec<OsmNodeId>) -> OsmWayData {
        OsmWayData {
            osmid,
            nodes,
            tags: OsmTags::new(),
        }
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> OsmWayData {
        self.tags.insert(String::from(key), String::from(value));
        self
    }

    /// a way is closed when it has more than one node reference and its first
    /// and last node references are the same OSMID.
    pub fn is_closed(&self) -> bool {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(src), Some(dst)) => self.nodes.len() > 1 && src == dst,
            _ => false,
        }
    }
}
