//! graph fixtures shared by unit tests.
//!
//! ```text
//! nodes   1 (0,0)  2 (1,0)  3 (1,1)            outer ring of a lake
//!         4 (0.25,0.25) 5 (0.5,0.25) 6 (0.5,0.5)  island inside it
//!         7 (2,0)  8 (3,0)  9 (4,0)  10 (5,0)   a bus line
//! way 1   [1,2,3,1]   closed, natural=water
//! way 2   [4,5,6,4]   closed
//! way 3   [7,8]       highway=primary
//! way 4   [8,9]
//! way 5   [9,10]      highway=service
//! way 6   [1,2,3]     open
//! way 7   [7,999]     node 999 does not exist
//! rel 1   multipolygon: (1,outer) (2,inner)
//! rel 2   route: (3,"") (4,"") (5,"alt")
//! rel 3   multipolygon: (6,outer)
//! ```
use super::{
    OsmEntityGraph, OsmNodeData, OsmNodeId, OsmRelationData, OsmRelationId, OsmWayData,
    OsmWayId,
};

pub fn node(id: i64, x: f64, y: f64) -> OsmNodeData {
    OsmNodeData::new(OsmNodeId(id), x, y)
}

pub fn way(id: i64, nodes: &[i64]) -> OsmWayData {
    OsmWayData::new(OsmWayId(id), nodes.iter().map(|n| OsmNodeId(*n)).collect())
}

pub fn relation(id: i64, is_polygon: bool, members: &[(i64, &str)]) -> OsmRelationData {
    members.iter().fold(
        OsmRelationData::new(OsmRelationId(id), is_polygon),
        |r, (way_id, role)| r.with_member(OsmWayId(*way_id), role),
    )
}

pub fn example_nodes() -> Vec<OsmNodeData> {
    vec![
        node(1, 0.0, 0.0),
        node(2, 1.0, 0.0),
        node(3, 1.0, 1.0),
        node(4, 0.25, 0.25),
        node(5, 0.5, 0.25),
        node(6, 0.5, 0.5),
        node(7, 2.0, 0.0)
            .with_tag("highway", "bus_stop")
            .with_tag("name", "Depot"),
        node(8, 3.0, 0.0),
        node(9, 4.0, 0.0).with_tag("highway", "crossing"),
        node(10, 5.0, 0.0),
    ]
}

pub fn example_ways() -> Vec<OsmWayData> {
    vec![
        way(1, &[1, 2, 3, 1])
            .with_tag("natural", "water")
            .with_tag("name", "Lake"),
        way(2, &[4, 5, 6, 4]),
        way(3, &[7, 8])
            .with_tag("highway", "primary")
            .with_tag("name", "Main Street"),
        way(4, &[8, 9]),
        way(5, &[9, 10]).with_tag("highway", "service"),
        way(6, &[1, 2, 3]),
        way(7, &[7, 999]),
    ]
}

pub fn example_relations() -> Vec<OsmRelationData> {
    vec![
        relation(1, true, &[(1, "outer"), (2, "inner")])
            .with_tag("type", "multipolygon")
            .with_tag("name", "Lake"),
        relation(2, false, &[(3, ""), (4, ""), (5, "alt")])
            .with_tag("type", "route")
            .with_tag("route", "bus")
            .with_tag("name", "Line 1"),
        relation(3, true, &[(6, "outer")]).with_tag("type", "multipolygon"),
    ]
}

/// every fixture element in one graph
pub fn example_graph() -> OsmEntityGraph {
    OsmEntityGraph::new(example_nodes(), example_ways(), example_relations())
}

/// a graph with only the given relations on top of the example nodes and ways
pub fn graph_with_relations(relations: Vec<OsmRelationData>) -> OsmEntityGraph {
    OsmEntityGraph::new(example_nodes(), example_ways(), relations)
}
