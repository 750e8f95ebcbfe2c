use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use super::{OsmNodeId, OsmTags};

/// represents a raw OSM node: a WGS84 position plus its tags.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmNodeData {
    pub osmid: OsmNodeId,
    /// longitude
    pub x: f64,
    /// latitude
    pub y: f64,
    #[serde(default)]
    pub tags: OsmTags,
}

impl OsmNodeData {
    pub fn new(osmid: OsmNodeId, x: f64, y: f64) -> OsmNodeData {
        OsmNodeData {
            osmid,
            x,
            y,
            tags: OsmTags::new(),
        }
    }

    /// adds (or replaces) a tag on this node
    pub fn with_tag(mut self, key: &str, value: &str) -> OsmNodeData {
        self.tags.insert(String::from(key), String::from(value));
        self
    }

    pub fn get_coord(&self) -> Coord<f64> {
        Coord::from((self.x, self.y))
    }

    pub fn get_point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}
