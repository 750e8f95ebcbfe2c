mod attribute_table;
mod osm_geometry_kind;
mod ring;
mod sfc_collection;
mod sfc_geometry;
mod sfc_metadata;
mod traced_geometry;

pub use attribute_table::{AttributeRow, AttributeTable};
pub use osm_geometry_kind::OsmGeometryKind;
pub use ring::{group_rings, Ring};
pub use sfc_collection::{SfcCollection, SfcEntry};
pub use sfc_geometry::SfcGeometry;
pub use sfc_metadata::{BoundingBox, Crs, SfcMetadata};
pub use traced_geometry::{TracedGeometry, TracedVertex};
