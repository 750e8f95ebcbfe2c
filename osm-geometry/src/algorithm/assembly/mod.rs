mod multilinestring;
mod multipolygon;
mod role_groups;
mod unclosed_ring_policy;

pub use multilinestring::{trace_multilinestring, MultiLineStringTrace, RoleLineString};
pub use multipolygon::{trace_multipolygon, validate_ring, MultiPolygonTrace};
pub use role_groups::{role_label, RoleGroups};
pub use unclosed_ring_policy::UnclosedRingPolicy;
