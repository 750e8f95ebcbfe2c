use serde::{Deserialize, Serialize};

use super::{OsmRelationId, OsmTags, OsmWayId};

/// a way member of a relation along with its role, such as "outer", "inner" or "".
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMember {
    pub way: OsmWayId,
    #[serde(default)]
    pub role: String,
}

impl RelationMember {
    pub fn new(way: OsmWayId, role: &str) -> RelationMember {
        RelationMember {
            way,
            role: String::from(role),
        }
    }
}

/// an OSM relation restricted to its way members, in declaration order.
///
/// `is_polygon` is assigned during ingestion and is trusted here: polygon relations
/// are assembled as multipolygons, all others as multilinestrings.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmRelationData {
    pub osmid: OsmRelationId,
    pub members: Vec<RelationMember>,
    #[serde(default)]
    pub tags: OsmTags,
    #[serde(default)]
    pub is_polygon: bool,
}

impl OsmRelationData {
    /// values of the `type` tag that denote a polygon relation
    pub const POLYGON_TYPES: [&'static str; 2] = ["multipolygon", "boundary"];

    pub fn new(osmid: OsmRelationId, is_polygon: bool) -> OsmRelationData {
        OsmRelationData {
            osmid,
            members: vec![],
            tags: OsmTags::new(),
            is_polygon,
        }
    }

    pub fn with_member(mut self, way: OsmWayId, role: &str) -> OsmRelationData {
        self.members.push(RelationMember::new(way, role));
        self
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> OsmRelationData {
        self.tags.insert(String::from(key), String::from(value));
        self
    }

    /// true if the `type` tag names a polygon relation type
    pub fn has_polygon_type_tag(&self) -> bool {
        self.tags
            .get("type")
            .is_some_and(|t| Self::POLYGON_TYPES.contains(&t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::OsmRelationData;
    use crate::model::osm::graph::{OsmRelationId, OsmWayId};

    #[test]
    fn members_keep_declaration_order() {
        let relation = OsmRelationData::new(OsmRelationId(1), false)
            .with_member(OsmWayId(3), "stop")
            .with_member(OsmWayId(4), "")
            .with_member(OsmWayId(5), "stop");
        let ways: Vec<_> = relation.members.iter().map(|m| m.way).collect();
        assert_eq!(ways, vec![OsmWayId(3), OsmWayId(4), OsmWayId(5)]);
        assert_eq!(relation.members[1].role, "");
    }

    #[test]
    fn polygon_type_tag() {
        let mp = OsmRelationData::new(OsmRelationId(1), false).with_tag("type", "multipolygon");
        let boundary = OsmRelationData::new(OsmRelationId(2), false).with_tag("type", "boundary");
        let route = OsmRelationData::new(OsmRelationId(3), false).with_tag("type", "route");
        assert!(mp.has_polygon_type_tag());
        assert!(boundary.has_polygon_type_tag());
        assert!(!route.has_polygon_type_tag());
        assert!(!OsmRelationData::new(OsmRelationId(4), true).has_polygon_type_tag());
    }
}
