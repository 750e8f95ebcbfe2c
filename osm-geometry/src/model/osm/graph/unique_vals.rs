use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::{OsmEntityGraph, OsmEntityKind};

/// the sorted, de-duplicated tag keys observed for one entity kind, with a
/// key to column index lookup. column identity in attribute tables is
/// positional, so this order is shared by every row of that kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeyIndex {
    keys: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl KeyIndex {
    pub fn new<I, S>(keys: I) -> KeyIndex
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = keys
            .into_iter()
            .map(Into::into)
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect::<Vec<_>>();
        let lookup = keys
            .iter()
            .enumerate()
            .map(|(idx, k)| (k.clone(), idx))
            .collect();
        KeyIndex { keys, lookup }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn column_of(&self, key: &str) -> Option<usize> {
        self.lookup.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup.contains_key(key)
    }
}

impl From<Vec<String>> for KeyIndex {
    fn from(value: Vec<String>) -> Self {
        KeyIndex::new(value)
    }
}

impl From<KeyIndex> for Vec<String> {
    fn from(value: KeyIndex) -> Self {
        value.keys
    }
}

/// per-kind key sets fixing the attribute table columns for nodes, ways and
/// relations. relation tables of both multipolygons and multilinestrings share
/// the relation key set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniqueVals {
    #[serde(default)]
    pub nodes: KeyIndex,
    #[serde(default)]
    pub ways: KeyIndex,
    #[serde(default)]
    pub relations: KeyIndex,
}

impl UniqueVals {
    pub fn new(nodes: KeyIndex, ways: KeyIndex, relations: KeyIndex) -> UniqueVals {
        UniqueVals {
            nodes,
            ways,
            relations,
        }
    }

    /// collects every tag key present in the graph, per entity kind.
    pub fn from_graph(graph: &OsmEntityGraph) -> UniqueVals {
        let nodes = KeyIndex::new(
            graph
                .nodes()
                .values()
                .flat_map(|n| n.tags.keys().cloned()),
        );
        let ways = KeyIndex::new(graph.ways().values().flat_map(|w| w.tags.keys().cloned()));
        let relations = KeyIndex::new(
            graph
                .relations()
                .iter()
                .flat_map(|r| r.tags.keys().cloned()),
        );
        UniqueVals::new(nodes, ways, relations)
    }

    pub fn get(&self, kind: OsmEntityKind) -> &KeyIndex {
        match kind {
            OsmEntityKind::Node => &self.nodes,
            OsmEntityKind::Way => &self.ways,
            OsmEntityKind::Relation => &self.relations,
        }
    }
}
