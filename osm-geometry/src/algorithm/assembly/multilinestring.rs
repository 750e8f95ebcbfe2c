use super::RoleGroups;
use crate::{
    algorithm::trace::{trace_way, MissingNodePolicy},
    model::osm::{
        geometry::TracedGeometry,
        graph::{OsmEntityGraph, OsmRelationData, OsmRelationId},
        OsmError,
    },
};

/// the concatenated path of all members of a relation sharing one role
#[derive(Debug, Clone, PartialEq)]
pub struct RoleLineString {
    pub relation: OsmRelationId,
    pub role: String,
    pub label: String,
    pub geometry: TracedGeometry,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiLineStringTrace {
    /// one linestring per distinct role, roles in ascending order
    pub linestrings: Vec<RoleLineString>,
    /// recoverable failures of individual members
    pub warnings: Vec<OsmError>,
}

/// traces a non-polygon relation into one linestring per distinct member role.
///
/// the members of a role are traced in declaration order and their coordinates
/// appended one after the other without any reordering or gap closing. a member
/// that cannot be traced is left out of its role's path and reported as a warning.
/// a relation without members yields no linestrings.
pub fn trace_multilinestring(
    relation: &OsmRelationData,
    graph: &OsmEntityGraph,
    policy: MissingNodePolicy,
) -> Result<MultiLineStringTrace, OsmError> {
    let groups = RoleGroups::new(relation);
    let mut result = MultiLineStringTrace::default();
    for (role, members) in groups.iter() {
        let mut geometry = TracedGeometry::new();
        for member in members {
            match trace_way(&member.way, graph, policy) {
                Ok(trace) => {
                    result.warnings.extend(trace.skipped_errors());
                    geometry.append(trace.geometry);
                }
                Err(OsmError::GraphMissingWayId(way)) => {
                    result.warnings.push(OsmError::MissingWay {
                        relation: relation.osmid,
                        way,
                    });
                }
                Err(e) if e.is_recoverable() => result.warnings.push(e),
                Err(e) => return Err(e),
            }
        }
        log::debug!(
            "relation {} role '{}': {} member(s), {} coordinate(s)",
            relation.osmid,
            role,
            members.len(),
            geometry.len()
        );
        result.linestrings.push(RoleLineString {
            relation: relation.osmid,
            role: String::from(role),
            label: groups.label(role),
            geometry,
        });
    }
    Ok(result)
}
