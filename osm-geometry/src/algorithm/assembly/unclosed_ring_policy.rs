use serde::{Deserialize, Serialize};

/// what happens to a multipolygon relation with a member way that does not
/// form a closed ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclosedRingPolicy {
    /// keep the relation, mark the ring as unclosed and report it
    #[default]
    Flag,
    /// drop the whole relation and report it
    Reject,
}

impl std::fmt::Display for UnclosedRingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnclosedRingPolicy::Flag => write!(f, "flag"),
            UnclosedRingPolicy::Reject => write!(f, "reject"),
        }
    }
}
