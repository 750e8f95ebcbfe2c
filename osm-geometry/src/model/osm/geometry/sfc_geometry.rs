use geo::{Coord, Geometry, MultiLineString, Point, Polygon};
use serde::{Deserialize, Serialize};

use super::{group_rings, OsmGeometryKind, Ring, TracedGeometry};
use crate::model::osm::graph::OsmNodeId;

/// the geometry of one collection entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum SfcGeometry {
    Point { node: OsmNodeId, coord: Coord<f64> },
    LineString(TracedGeometry),
    Polygon(TracedGeometry),
    /// flat ring sequence of a polygon relation in member order
    MultiPolygon { rings: Vec<Ring> },
    /// the member ways of one role, concatenated in member order
    MultiLineString(TracedGeometry),
}

impl SfcGeometry {
    pub fn kind(&self) -> OsmGeometryKind {
        match self {
            SfcGeometry::Point { .. } => OsmGeometryKind::Points,
            SfcGeometry::LineString(_) => OsmGeometryKind::Lines,
            SfcGeometry::Polygon(_) => OsmGeometryKind::Polygons,
            SfcGeometry::MultiPolygon { .. } => OsmGeometryKind::MultiPolygons,
            SfcGeometry::MultiLineString(_) => OsmGeometryKind::MultiLineStrings,
        }
    }

    /// number of coordinates across all parts
    pub fn n_coords(&self) -> usize {
        match self {
            SfcGeometry::Point { .. } => 1,
            SfcGeometry::LineString(g) | SfcGeometry::Polygon(g) | SfcGeometry::MultiLineString(g) => {
                g.len()
            }
            SfcGeometry::MultiPolygon { rings } => rings.iter().map(|r| r.geometry.len()).sum(),
        }
    }

    /// converts to a `geo` geometry. multipolygon rings are grouped into shells
    /// and holes by [`group_rings`]; a multilinestring keeps the concatenated
    /// role path as its single part, or has no parts when no member of the role
    /// could be traced.
    pub fn to_geo(&self) -> Geometry<f64> {
        match self {
            SfcGeometry::Point { coord, .. } => Geometry::Point(Point::from(*coord)),
            SfcGeometry::LineString(g) => Geometry::LineString(g.to_linestring()),
            SfcGeometry::Polygon(g) => Geometry::Polygon(Polygon::new(g.to_linestring(), vec![])),
            SfcGeometry::MultiPolygon { rings } => Geometry::MultiPolygon(group_rings(rings)),
            SfcGeometry::MultiLineString(g) if g.is_empty() => {
                Geometry::MultiLineString(MultiLineString::new(vec![]))
            }
            SfcGeometry::MultiLineString(g) => {
                Geometry::MultiLineString(MultiLineString::new(vec![g.to_linestring()]))
            }
        }
    }
}
