use std::{fs::File, io::BufReader, path::Path};

use flate2::read::GzDecoder;
use geo::{BoundingRect, MultiPoint};
use serde::{Deserialize, Serialize};

use crate::model::{
    osm::{
        geometry::{BoundingBox, Crs, SfcMetadata},
        graph::{OsmEntityGraph, OsmNodeData, OsmRelationData, OsmWayData, UniqueVals},
    },
    OsmCliError,
};

/// an entity graph as a JSON document, optionally gzipped. the bounding box is
/// computed from the node coordinates when absent and the CRS defaults to WGS84.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct OsmDocument {
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub crs: Option<Crs>,
    #[serde(default)]
    pub nodes: Vec<OsmNodeData>,
    #[serde(default)]
    pub ways: Vec<OsmWayData>,
    #[serde(default)]
    pub relations: Vec<OsmRelationData>,
}

impl OsmDocument {
    /// reads a `.json` or `.json.gz` document
    pub fn read(path: &Path) -> Result<OsmDocument, OsmCliError> {
        let file = File::open(path)?;
        let gzipped = path.extension().map(|e| e == "gz").unwrap_or_default();
        let document: OsmDocument = if gzipped {
            serde_json::from_reader(BufReader::new(GzDecoder::new(file)))?
        } else {
            serde_json::from_reader(BufReader::new(file))?
        };
        log::info!(
            "read {} nodes, {} ways, {} relations from {}",
            document.nodes.len(),
            document.ways.len(),
            document.relations.len(),
            path.to_string_lossy()
        );
        Ok(document)
    }

    /// builds the entity graph, its key sets and the collection metadata.
    /// a relation tagged `type=multipolygon` or `type=boundary` is marked as a
    /// polygon relation even when the document does not say so.
    pub fn into_parts(self) -> (OsmEntityGraph, UniqueVals, SfcMetadata) {
        let bbox = self.bbox.unwrap_or_else(|| nodes_bbox(&self.nodes));
        let crs = self.crs.unwrap_or_default();
        let relations = self
            .relations
            .into_iter()
            .map(|mut r| {
                r.is_polygon = r.is_polygon || r.has_polygon_type_tag();
                r
            })
            .collect();
        let graph = OsmEntityGraph::new(self.nodes, self.ways, relations);
        let unique_vals = UniqueVals::from_graph(&graph);
        (graph, unique_vals, SfcMetadata::new(bbox, crs))
    }
}

fn nodes_bbox(nodes: &[OsmNodeData]) -> BoundingBox {
    let points: MultiPoint<f64> = nodes.iter().map(|n| n.get_point()).collect();
    match points.bounding_rect() {
        Some(rect) => BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y),
        None => BoundingBox::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::OsmDocument;
    use crate::model::osm::{
        geometry::{BoundingBox, Crs},
        graph::{KeyIndex, OsmRelationId},
    };
    use std::io::Write;

    const DOCUMENT: &str = r#"{
        "nodes": [
            {"osmid": 1, "x": -105.2, "y": 39.7, "tags": {"highway": "stop"}},
            {"osmid": 2, "x": -105.0, "y": 39.9},
            {"osmid": 3, "x": -104.9, "y": 39.6}
        ],
        "ways": [
            {"osmid": 10, "nodes": [1, 2, 3, 1], "tags": {"landuse": "park"}}
        ],
        "relations": [
            {"osmid": 100, "members": [{"way": 10, "role": "outer"}], "tags": {"type": "multipolygon"}},
            {"osmid": 101, "members": [{"way": 10}], "tags": {"type": "route"}}
        ]
    }"#;

    #[test]
    fn reads_document_and_derives_metadata() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("test invariant: temp file created");
        file.write_all(DOCUMENT.as_bytes())
            .expect("test invariant: temp file written");
        let document = match OsmDocument::read(file.path()) {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        };
        let (graph, unique_vals, metadata) = document.into_parts();
        assert_eq!(graph.n_nodes(), 3);
        assert_eq!(graph.n_ways(), 1);
        assert_eq!(metadata.bbox, BoundingBox::new(-105.2, 39.6, -104.9, 39.9));
        assert_eq!(metadata.crs, Crs::default());
        assert_eq!(unique_vals.nodes, KeyIndex::new(vec!["highway"]));
        assert_eq!(unique_vals.ways, KeyIndex::new(vec!["landuse"]));

        let polygon_flags: Vec<(OsmRelationId, bool)> = graph
            .relations()
            .iter()
            .map(|r| (r.osmid, r.is_polygon))
            .collect();
        assert_eq!(
            polygon_flags,
            vec![(OsmRelationId(100), true), (OsmRelationId(101), false)]
        );
        assert_eq!(graph.relations()[1].members[0].role, "");
    }

    #[test]
    fn reads_gzipped_document_with_explicit_bbox() {
        let file = tempfile::Builder::new()
            .suffix(".json.gz")
            .tempfile()
            .expect("test invariant: temp file created");
        let contents = r#"{"bbox": {"xmin": 0.0, "ymin": 0.0, "xmax": 10.0, "ymax": 10.0}, "nodes": [{"osmid": 1, "x": 1.0, "y": 1.0}]}"#;
        {
            let handle = file.reopen().expect("test invariant: temp file reopened");
            let mut encoder = flate2::write::GzEncoder::new(handle, flate2::Compression::default());
            encoder
                .write_all(contents.as_bytes())
                .expect("test invariant: gzip written");
            encoder.finish().expect("test invariant: gzip finished");
        }
        match OsmDocument::read(file.path()) {
            Ok(document) => {
                let (graph, _, metadata) = document.into_parts();
                assert_eq!(graph.n_nodes(), 1);
                assert_eq!(metadata.bbox, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
            }
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn empty_document_has_empty_bbox() {
        let (graph, _, metadata) = OsmDocument::default().into_parts();
        assert_eq!(graph.n_nodes(), 0);
        assert_eq!(metadata.bbox, BoundingBox::default());
    }
}
