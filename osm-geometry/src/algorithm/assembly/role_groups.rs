use std::collections::BTreeMap;

use crate::model::osm::graph::{OsmRelationData, OsmRelationId, RelationMember};

/// label suffix for members without a role
pub const NO_ROLE: &str = "(no role)";

/// the row label of a role-derived linestring, "{relation}-{role}".
///
/// the empty role is written as [`NO_ROLE`]. a role that itself starts with "("
/// gets one more "(" in front, so no role string can produce the empty role's
/// label and labels stay unique per relation.
pub fn role_label(relation: &OsmRelationId, role: &str) -> String {
    if role.is_empty() {
        format!("{relation}-{NO_ROLE}")
    } else if role.starts_with('(') {
        format!("{relation}-({role}")
    } else {
        format!("{relation}-{role}")
    }
}

/// the members of one relation grouped by role. roles iterate in ascending
/// order (so "" comes first) and each group keeps the declared member order.
#[derive(Debug, Clone)]
pub struct RoleGroups<'a> {
    relation: OsmRelationId,
    groups: BTreeMap<&'a str, Vec<&'a RelationMember>>,
}

impl<'a> RoleGroups<'a> {
    pub fn new(relation: &'a OsmRelationData) -> RoleGroups<'a> {
        let mut groups: BTreeMap<&'a str, Vec<&'a RelationMember>> = BTreeMap::new();
        for member in relation.members.iter() {
            groups.entry(member.role.as_str()).or_default().push(member);
        }
        RoleGroups {
            relation: relation.osmid,
            groups,
        }
    }

    pub fn relation(&self) -> OsmRelationId {
        self.relation
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn roles(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    pub fn members(&self, role: &str) -> Option<&[&'a RelationMember]> {
        self.groups.get(role).map(|m| m.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a RelationMember])> + '_ {
        self.groups.iter().map(|(role, members)| (*role, members.as_slice()))
    }

    pub fn label(&self, role: &str) -> String {
        role_label(&self.relation, role)
    }
}
