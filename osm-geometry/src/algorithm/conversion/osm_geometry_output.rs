use super::ConversionWarning;
use crate::model::osm::geometry::{OsmGeometryKind, SfcCollection};

/// the collections produced by one conversion, in the order they were
/// requested, along with every warning raised while assembling them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsmGeometryOutput {
    collections: Vec<SfcCollection>,
    warnings: Vec<ConversionWarning>,
}

impl OsmGeometryOutput {
    pub fn push(&mut self, collection: SfcCollection, warnings: Vec<ConversionWarning>) {
        self.collections.push(collection);
        self.warnings.extend(warnings);
    }

    pub fn get(&self, kind: OsmGeometryKind) -> Option<&SfcCollection> {
        self.collections.iter().find(|c| c.kind() == kind)
    }

    pub fn collections(&self) -> &[SfcCollection] {
        &self.collections
    }

    pub fn warnings(&self) -> &[ConversionWarning] {
        &self.warnings
    }

    pub fn warnings_for(
        &self,
        kind: OsmGeometryKind,
    ) -> impl Iterator<Item = &ConversionWarning> + '_ {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}
