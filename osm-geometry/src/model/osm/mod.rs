pub mod geometry;
pub mod graph;
mod osm_error;

pub use osm_error::OsmError;
