use geo::{Contains, Intersects, LineString, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};

use super::TracedGeometry;
use crate::model::osm::graph::OsmWayId;

/// one member way of a multipolygon relation, traced on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub member: OsmWayId,
    pub role: String,
    pub geometry: TracedGeometry,
    /// false when the traced member does not end on its starting node. such
    /// rings are kept (flagged) but never closed artificially.
    pub closed: bool,
}

impl Ring {
    pub const INNER_ROLE: &'static str = "inner";

    pub fn new(member: OsmWayId, role: &str, geometry: TracedGeometry) -> Ring {
        let closed = geometry.is_closed();
        Ring {
            member,
            role: String::from(role),
            geometry,
            closed,
        }
    }

    pub fn is_inner(&self) -> bool {
        self.role == Self::INNER_ROLE
    }

    /// the ring's row label is the member way OSMID
    pub fn label(&self) -> String {
        self.member.to_string()
    }
}

/// groups a flat ring sequence into polygons with holes.
///
/// every closed ring whose role is not "inner" starts a shell. each closed "inner"
/// ring becomes a hole of the first shell with one of the ring's vertices in its
/// interior. a ring lying wholly on shell boundaries goes to the first shell
/// touching its first coordinate, otherwise to the most recently started shell.
/// an "inner" ring seen before any shell becomes a shell itself. unclosed rings
/// are left out.
pub fn group_rings(rings: &[Ring]) -> MultiPolygon<f64> {
    let mut shells: Vec<(Polygon<f64>, Vec<LineString<f64>>)> = vec![];
    for ring in rings.iter().filter(|r| r.closed) {
        let linestring = ring.geometry.to_linestring();
        if !ring.is_inner() || shells.is_empty() {
            shells.push((Polygon::new(linestring, vec![]), vec![]));
            continue;
        }
        let interior = shells.iter().position(|(shell, _)| {
            ring.geometry
                .coords()
                .any(|c| shell.contains(&Point::from(c)))
        });
        let touching = || {
            let head = ring.geometry.coords().next().map(Point::from)?;
            shells.iter().position(|(shell, _)| shell.intersects(&head))
        };
        let idx = interior
            .or_else(touching)
            .unwrap_or(shells.len() - 1);
        shells[idx].1.push(linestring);
    }
    let polygons = shells
        .into_iter()
        .map(|(shell, holes)| Polygon::new(shell.exterior().clone(), holes))
        .collect();
    MultiPolygon::new(polygons)
}
