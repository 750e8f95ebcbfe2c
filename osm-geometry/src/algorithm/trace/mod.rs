mod missing_node_policy;
mod way_tracer;

pub use missing_node_policy::MissingNodePolicy;
pub use way_tracer::{trace_way, trace_way_data, WayTrace};
