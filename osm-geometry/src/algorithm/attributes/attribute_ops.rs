use crate::model::osm::{
    geometry::{AttributeRow, AttributeTable},
    graph::{KeyIndex, OsmEntityGraph, OsmEntityKind, OsmTags, UniqueVals},
    OsmError,
};

/// maps an entity's tags onto a row with one cell per key of its kind's key set.
/// keys the entity does not carry are absent. a tag key missing from the key set
/// means the key set was not built from this graph and is reported as an error.
pub fn build_row(
    tags: &OsmTags,
    keys: &KeyIndex,
    kind: OsmEntityKind,
    entity: &str,
) -> Result<AttributeRow, OsmError> {
    let mut row = AttributeRow::empty(keys.len());
    for (key, value) in tags.iter() {
        let col = keys
            .column_of(key)
            .ok_or_else(|| OsmError::UnknownKey {
                kind,
                key: key.clone(),
                entity: String::from(entity),
            })?;
        row.0[col] = Some(value.clone());
    }
    Ok(row)
}

/// builds a table from (label, tags) pairs. rows are emitted in the given order
/// and each label is kept alongside its row.
pub fn build_table<'a, I>(
    entities: I,
    keys: &KeyIndex,
    kind: OsmEntityKind,
) -> Result<AttributeTable, OsmError>
where
    I: IntoIterator<Item = (String, &'a OsmTags)>,
{
    let mut table = AttributeTable::new(keys);
    for (label, tags) in entities {
        let row = build_row(tags, keys, kind, &label)?;
        table.push(label, row)?;
    }
    Ok(table)
}

/// confirms every tag key of the graph appears in the key set of its kind.
/// only the kinds listed are checked.
pub fn check_key_coverage(
    graph: &OsmEntityGraph,
    unique_vals: &UniqueVals,
    kinds: &[OsmEntityKind],
) -> Result<(), OsmError> {
    for kind in kinds {
        let keys = unique_vals.get(*kind);
        let tagged: Box<dyn Iterator<Item = (String, &OsmTags)>> = match kind {
            OsmEntityKind::Node => Box::new(
                graph
                    .nodes()
                    .values()
                    .map(|n| (n.osmid.to_string(), &n.tags)),
            ),
            OsmEntityKind::Way => Box::new(
                graph
                    .ways()
                    .values()
                    .map(|w| (w.osmid.to_string(), &w.tags)),
            ),
            OsmEntityKind::Relation => Box::new(
                graph
                    .relations()
                    .iter()
                    .map(|r| (r.osmid.to_string(), &r.tags)),
            ),
        };
        for (entity, tags) in tagged {
            if let Some(key) = tags.keys().find(|k| !keys.contains(k)) {
                return Err(OsmError::UnknownKey {
                    kind: *kind,
                    key: key.clone(),
                    entity,
                });
            }
        }
    }
    Ok(())
}
