use super::UnclosedRingPolicy;
use crate::{
    algorithm::trace::{trace_way, MissingNodePolicy},
    model::osm::{
        geometry::Ring,
        graph::{OsmEntityGraph, OsmRelationData, OsmRelationId},
        OsmError,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygonTrace {
    /// one ring per traced member way, in member declaration order
    pub rings: Vec<Ring>,
    /// recoverable failures of individual members and flagged rings
    pub warnings: Vec<OsmError>,
}

/// fails with [`OsmError::UnclosedRing`] if a ring does not end on its starting node
pub fn validate_ring(relation: &OsmRelationId, ring: &Ring) -> Result<(), OsmError> {
    if ring.closed {
        Ok(())
    } else {
        Err(OsmError::UnclosedRing {
            relation: *relation,
            way: ring.member,
        })
    }
}

/// traces a polygon relation into a flat sequence of rings, one per member way.
///
/// roles are recorded on each ring; grouping shells and holes is left to the
/// consumer. a member that cannot be traced is left out and reported as a warning.
/// an unclosed ring is handled by the given [`UnclosedRingPolicy`]: flagged rings
/// are kept and reported, rejection fails the whole relation.
pub fn trace_multipolygon(
    relation: &OsmRelationData,
    graph: &OsmEntityGraph,
    missing_node_policy: MissingNodePolicy,
    unclosed_ring_policy: UnclosedRingPolicy,
) -> Result<MultiPolygonTrace, OsmError> {
    let mut result = MultiPolygonTrace::default();
    for member in relation.members.iter() {
        let trace = match trace_way(&member.way, graph, missing_node_policy) {
            Ok(trace) => trace,
            Err(OsmError::GraphMissingWayId(way)) => {
                result.warnings.push(OsmError::MissingWay {
                    relation: relation.osmid,
                    way,
                });
                continue;
            }
            Err(e) if e.is_recoverable() => {
                result.warnings.push(e);
                continue;
            }
            Err(e) => return Err(e),
        };
        result.warnings.extend(trace.skipped_errors());

        let ring = Ring::new(member.way, &member.role, trace.geometry);
        match (validate_ring(&relation.osmid, &ring), unclosed_ring_policy) {
            (Ok(_), _) => {}
            (Err(e), UnclosedRingPolicy::Flag) => result.warnings.push(e),
            (Err(e), UnclosedRingPolicy::Reject) => return Err(e),
        }
        result.rings.push(ring);
    }
    log::debug!(
        "relation {}: {} of {} member(s) traced as rings",
        relation.osmid,
        result.rings.len(),
        relation.members.len()
    );
    Ok(result)
}
