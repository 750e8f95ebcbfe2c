use std::{fs::File, path::Path};

use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use kdam::tqdm;
use wkt::ToWkt;

use crate::{
    algorithm::conversion::OsmGeometryOutput,
    model::{osm::geometry::SfcCollection, osm::OsmError, OsmCliError},
};

pub trait SfcWriter {
    /// writes each geometry collection to `<kind>.csv.gz` in a shared directory.
    /// rows carry the restructured attributes followed by a WKT `geometry` column.
    fn write_sfc(&self, output_directory: &Path, overwrite: bool) -> Result<(), OsmCliError>;
}

pub const GEOMETRY_COLUMN: &str = "geometry";

impl SfcWriter for OsmGeometryOutput {
    fn write_sfc(&self, output_directory: &Path, overwrite: bool) -> Result<(), OsmCliError> {
        if !output_directory.is_dir() && std::fs::create_dir_all(output_directory).is_err() {
            let dirname = output_directory.as_os_str().to_string_lossy();
            return Err(OsmCliError::from(OsmError::InternalError(format!(
                "unable to create directory {}",
                &dirname
            ))));
        }
        for collection in self.collections() {
            let filename = format!("{}.csv.gz", collection.kind());
            match create_writer(output_directory, &filename, overwrite)? {
                Some(writer) => write_collection(collection, writer, &filename)?,
                None => log::warn!("{filename} exists and overwrite is not set, skipping"),
            }
        }
        Ok(())
    }
}

fn write_collection(
    collection: &SfcCollection,
    mut writer: csv::Writer<GzEncoder<File>>,
    filename: &str,
) -> Result<(), OsmCliError> {
    let attributes = collection.restructured_attributes()?;
    let header = attributes
        .columns()
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(GEOMETRY_COLUMN));
    writer
        .write_record(header)
        .map_err(|e| OsmCliError::CsvWriteError(String::from(filename), e))?;

    let iter = tqdm!(
        collection.entries().iter().zip(attributes.rows()),
        total = collection.len(),
        desc = format!("write {}", collection.kind())
    );
    for (entry, row) in iter {
        let wkt = entry.geometry.to_geo().to_wkt().to_string();
        let record = row
            .cells()
            .iter()
            .map(|cell| cell.as_deref().unwrap_or_default())
            .chain(std::iter::once(wkt.as_str()));
        writer
            .write_record(record)
            .map_err(|e| OsmCliError::CsvWriteError(String::from(filename), e))?;
    }
    eprintln!();
    let encoder = writer
        .into_inner()
        .map_err(|e| OsmCliError::from(e.into_error()))?;
    encoder.finish()?;
    Ok(())
}

fn create_writer(
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<Option<csv::Writer<GzEncoder<File>>>, OsmCliError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        return Ok(None);
    }
    let file = File::create(filepath)?;
    let buffer = GzEncoder::new(file, Compression::default());
    let writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(buffer);
    Ok(Some(writer))
}

#[cfg(test)]
mod tests {
    use super::SfcWriter;
    use crate::{
        algorithm::conversion::conversion_ops,
        config::ConversionConfiguration,
        model::osm::{
            geometry::{BoundingBox, Crs, OsmGeometryKind, SfcMetadata},
            graph::{test_graph, UniqueVals},
        },
    };
    use flate2::read::GzDecoder;
    use std::{fs::File, io::Read, path::Path};

    fn read_records(path: &Path) -> Vec<Vec<String>> {
        let file = File::open(path).expect("test invariant: output file exists");
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(GzDecoder::new(file));
        reader
            .records()
            .map(|r| {
                r.expect("test invariant: valid csv")
                    .iter()
                    .map(String::from)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn writes_one_file_per_collection() {
        let graph = test_graph::example_graph();
        let unique_vals = UniqueVals::from_graph(&graph);
        let metadata = SfcMetadata::new(BoundingBox::new(0.0, 0.0, 5.0, 1.0), Crs::default());
        let conf = ConversionConfiguration {
            parallelize: false,
            ..Default::default()
        };
        let output = match conversion_ops::convert(&graph, &unique_vals, &metadata, &conf) {
            Ok(o) => o,
            Err(e) => panic!("{e}"),
        };
        let dir = tempfile::tempdir().expect("test invariant: temp dir created");
        if let Err(e) = output.write_sfc(dir.path(), false) {
            panic!("{e}");
        }

        for kind in OsmGeometryKind::ALL {
            assert!(dir.path().join(format!("{kind}.csv.gz")).exists());
        }

        let points = read_records(&dir.path().join("points.csv.gz"));
        assert_eq!(points[0], vec!["osm_id", "name", "highway", "geometry"]);
        assert_eq!(points.len(), 11);
        assert_eq!(points[7], vec!["7", "Depot", "bus_stop", "POINT(2 0)"]);

        let lines = read_records(&dir.path().join("lines.csv.gz"));
        assert_eq!(
            lines[1],
            vec!["3", "Main Street", "primary", "", "LINESTRING(2 0,3 0)"]
        );

        let mls = read_records(&dir.path().join("multilinestrings.csv.gz"));
        assert_eq!(mls[0], vec!["osm_id", "role", "name", "route", "type", "geometry"]);
        assert_eq!(mls[1][0..2], ["2", ""]);
        assert_eq!(mls[2][0..2], ["2", "alt"]);
        assert_eq!(mls[2][5], "MULTILINESTRING((4 0,5 0))");
    }

    #[test]
    fn gzip_streams_are_complete() {
        let graph = test_graph::example_graph();
        let unique_vals = UniqueVals::from_graph(&graph);
        let conf = ConversionConfiguration {
            parallelize: false,
            ..Default::default()
        };
        let output = conversion_ops::convert(&graph, &unique_vals, &SfcMetadata::default(), &conf)
            .expect("test invariant: conversion succeeds");
        let dir = tempfile::tempdir().expect("test invariant: temp dir created");
        if let Err(e) = output.write_sfc(dir.path(), false) {
            panic!("{e}");
        }
        for kind in OsmGeometryKind::ALL {
            let file = File::open(dir.path().join(format!("{kind}.csv.gz")))
                .expect("test invariant: output file exists");
            let mut contents = String::new();
            // a missing gzip trailer surfaces here as an unexpected end of file
            match GzDecoder::new(file).read_to_string(&mut contents) {
                Ok(_) => assert!(contents.ends_with('\n'), "{kind} is truncated"),
                Err(e) => panic!("{kind}: {e}"),
            }
        }
    }

    #[test]
    fn role_without_traceable_members_is_written_empty() {
        let graph = test_graph::graph_with_relations(vec![test_graph::relation(
            9,
            false,
            &[(3, ""), (404, "ghost")],
        )
        .with_tag("name", "Partial")]);
        let unique_vals = UniqueVals::from_graph(&graph);
        let conf = ConversionConfiguration {
            parallelize: false,
            geometry_kinds: vec![OsmGeometryKind::MultiLineStrings],
            ..Default::default()
        };
        let output = conversion_ops::convert(&graph, &unique_vals, &SfcMetadata::default(), &conf)
            .expect("test invariant: conversion succeeds");
        assert_eq!(output.warnings().len(), 1);
        let dir = tempfile::tempdir().expect("test invariant: temp dir created");
        if let Err(e) = output.write_sfc(dir.path(), false) {
            panic!("{e}");
        }

        let mls = read_records(&dir.path().join("multilinestrings.csv.gz"));
        assert_eq!(mls.len(), 3);
        assert_eq!(mls[1], vec!["9", "", "Partial", "MULTILINESTRING((2 0,3 0))"]);
        assert_eq!(mls[2][0..3], ["9", "ghost", "Partial"]);
        let empty = &mls[2][3];
        assert!(empty.starts_with("MULTILINESTRING"), "{empty}");
        assert!(empty.contains("EMPTY"), "{empty}");
        assert!(!empty.contains('('), "{empty}");
    }

    #[test]
    fn existing_files_are_kept_without_overwrite() {
        let graph = test_graph::example_graph();
        let unique_vals = UniqueVals::from_graph(&graph);
        let conf = ConversionConfiguration {
            parallelize: false,
            geometry_kinds: vec![OsmGeometryKind::Points],
            ..Default::default()
        };
        let output = conversion_ops::convert(&graph, &unique_vals, &SfcMetadata::default(), &conf)
            .expect("test invariant: conversion succeeds");
        let dir = tempfile::tempdir().expect("test invariant: temp dir created");
        let path = dir.path().join("points.csv.gz");
        std::fs::write(&path, b"sentinel").expect("test invariant: file written");

        if let Err(e) = output.write_sfc(dir.path(), false) {
            panic!("{e}");
        }
        let contents = std::fs::read(&path).expect("test invariant: file read");
        assert_eq!(contents, b"sentinel");

        if let Err(e) = output.write_sfc(dir.path(), true) {
            panic!("{e}");
        }
        assert_eq!(read_records(&path).len(), 11);
    }
}
