use crate::model::osm::{
    geometry::{
        AttributeTable, OsmGeometryKind, SfcCollection, SfcEntry, SfcGeometry, SfcMetadata,
        TracedGeometry,
    },
    OsmError,
};

/// validates the alignment of an assembled collection and its attribute table
/// before handing both on with the pass-through metadata:
///
/// - every entry holds a geometry of the collection's kind, and every traced
///   vertex belongs to the member way its entry (or ring) was traced from
/// - the entry count matches the table's row label and row counts
/// - every row has one cell per column and entry labels match row labels position by position
///
/// any violation is an assembly defect and fails the whole collection.
pub fn normalize(
    kind: OsmGeometryKind,
    entries: Vec<SfcEntry>,
    attributes: AttributeTable,
    metadata: &SfcMetadata,
) -> Result<SfcCollection, OsmError> {
    for entry in entries.iter() {
        validate_entry(kind, entry)?;
    }

    check_length(
        format!("{kind} row labels"),
        entries.len(),
        attributes.row_labels().len(),
    )?;
    check_length(
        format!("{kind} attribute rows"),
        entries.len(),
        attributes.n_rows(),
    )?;
    for row in attributes.rows() {
        check_length(
            format!("{kind} attribute columns"),
            attributes.n_cols(),
            row.len(),
        )?;
    }

    for (index, (entry, row_label)) in entries.iter().zip(attributes.row_labels()).enumerate() {
        if &entry.label != row_label {
            return Err(OsmError::MisalignedRow {
                collection: kind.to_string(),
                index,
                geometry_label: entry.label.clone(),
                row_label: row_label.clone(),
            });
        }
    }

    Ok(SfcCollection::new(
        kind,
        entries,
        attributes,
        metadata.clone(),
    ))
}

fn check_length(collection: String, expected: usize, found: usize) -> Result<(), OsmError> {
    if expected == found {
        Ok(())
    } else {
        Err(OsmError::StructuralMismatch {
            collection,
            expected,
            found,
        })
    }
}

/// confirms all vertices of a geometry were traced through the given member
fn check_members(
    collection: String,
    geometry: &TracedGeometry,
    member: &str,
) -> Result<(), OsmError> {
    let found = geometry
        .vertices()
        .iter()
        .filter(|v| v.member.to_string() == member)
        .count();
    check_length(collection, geometry.len(), found)
}

fn validate_entry(kind: OsmGeometryKind, entry: &SfcEntry) -> Result<(), OsmError> {
    if entry.geometry.kind() != kind {
        return Err(OsmError::InternalError(format!(
            "entry '{}' holds a {} geometry in the {} collection",
            entry.label,
            entry.geometry.kind().sfc_type(),
            kind
        )));
    }
    match &entry.geometry {
        SfcGeometry::LineString(g) | SfcGeometry::Polygon(g) => check_members(
            format!("{kind} entry '{}' member ids", entry.label),
            g,
            &entry.osm_id,
        ),
        SfcGeometry::MultiPolygon { rings } => rings.iter().try_for_each(|ring| {
            check_members(
                format!("{kind} entry '{}' ring '{}' member ids", entry.label, ring.label()),
                &ring.geometry,
                &ring.label(),
            )
        }),
        SfcGeometry::Point { .. } | SfcGeometry::MultiLineString(_) => Ok(()),
    }
}
