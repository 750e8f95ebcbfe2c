use super::osm::OsmError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsmCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure converting OSM graph: {source}")]
    OsmError {
        #[from]
        source: OsmError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
}
