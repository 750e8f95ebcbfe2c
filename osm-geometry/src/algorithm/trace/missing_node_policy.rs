use serde::{Deserialize, Serialize};

/// how a way trace treats a node reference that is absent from the node list.
/// one policy applies to every way of a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingNodePolicy {
    /// fail the trace of the way with a missing node error
    #[default]
    Abandon,
    /// drop the missing point and keep tracing, shortening the geometry
    Skip,
}

impl std::fmt::Display for MissingNodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingNodePolicy::Abandon => write!(f, "abandon"),
            MissingNodePolicy::Skip => write!(f, "skip"),
        }
    }
}
