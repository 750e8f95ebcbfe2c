pub mod conversion_ops;
mod conversion_warning;
mod osm_geometry_output;

pub use conversion_warning::ConversionWarning;
pub use osm_geometry_output::OsmGeometryOutput;
