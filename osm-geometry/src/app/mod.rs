mod osm_document;
mod sfc_writer;

pub use osm_document::OsmDocument;
pub use sfc_writer::SfcWriter;
