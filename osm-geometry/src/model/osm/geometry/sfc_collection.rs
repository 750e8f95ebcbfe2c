use serde::{Deserialize, Serialize};

use super::{AttributeTable, OsmGeometryKind, SfcGeometry, SfcMetadata};
use crate::model::osm::OsmError;

/// one labelled geometry of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfcEntry {
    /// unique within the collection: the OSMID, or "{relation}-{role}" for
    /// multilinestring entries
    pub label: String,
    /// the OSMID of the source element
    pub osm_id: String,
    /// the member role, multilinestring entries only
    pub role: Option<String>,
    pub geometry: SfcGeometry,
}

impl SfcEntry {
    pub fn new(label: String, osm_id: String, geometry: SfcGeometry) -> SfcEntry {
        SfcEntry {
            label,
            osm_id,
            role: None,
            geometry,
        }
    }

    pub fn with_role(mut self, role: &str) -> SfcEntry {
        self.role = Some(String::from(role));
        self
    }
}

/// a validated geometry collection with its aligned attribute table and the
/// pass-through metadata. only built by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfcCollection {
    kind: OsmGeometryKind,
    entries: Vec<SfcEntry>,
    attributes: AttributeTable,
    metadata: SfcMetadata,
}

impl SfcCollection {
    pub(crate) fn new(
        kind: OsmGeometryKind,
        entries: Vec<SfcEntry>,
        attributes: AttributeTable,
        metadata: SfcMetadata,
    ) -> SfcCollection {
        SfcCollection {
            kind,
            entries,
            attributes,
            metadata,
        }
    }

    pub fn kind(&self) -> OsmGeometryKind {
        self.kind
    }

    pub fn entries(&self) -> &[SfcEntry] {
        &self.entries
    }

    pub fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    pub fn metadata(&self) -> &SfcMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// the attribute table in presentation layout, see [`AttributeTable::restructure`]
    pub fn restructured_attributes(&self) -> Result<AttributeTable, OsmError> {
        let osm_ids: Vec<String> = self.entries.iter().map(|e| e.osm_id.clone()).collect();
        match self.kind {
            OsmGeometryKind::MultiLineStrings => {
                let roles: Vec<String> = self
                    .entries
                    .iter()
                    .map(|e| e.role.clone().unwrap_or_default())
                    .collect();
                self.attributes.restructure(&osm_ids, Some(&roles))
            }
            _ => self.attributes.restructure(&osm_ids, None),
        }
    }
}
