use std::collections::HashSet;

use itertools::Itertools;
use kdam::tqdm;
use rayon::prelude::*;

use super::{ConversionWarning, OsmGeometryOutput};
use crate::{
    algorithm::{
        assembly::{trace_multilinestring, trace_multipolygon},
        attributes::attribute_ops,
        normalize::normalize_ops,
        trace::trace_way_data,
    },
    config::ConversionConfiguration,
    model::osm::{
        geometry::{
            AttributeRow, AttributeTable, OsmGeometryKind, SfcCollection, SfcEntry, SfcGeometry,
            SfcMetadata,
        },
        graph::{KeyIndex, OsmEntityGraph, OsmEntityKind, OsmWayId, UniqueVals},
        OsmError,
    },
};

/// the entries (with their attribute rows) and warnings produced by one node,
/// way or relation.
#[derive(Debug, Default)]
struct EntityOutput {
    entries: Vec<(SfcEntry, AttributeRow)>,
    warnings: Vec<OsmError>,
}

impl EntityOutput {
    fn single(entry: SfcEntry, row: AttributeRow, warnings: Vec<OsmError>) -> EntityOutput {
        EntityOutput {
            entries: vec![(entry, row)],
            warnings,
        }
    }

    fn dropped(warnings: Vec<OsmError>) -> EntityOutput {
        EntityOutput {
            entries: vec![],
            warnings,
        }
    }
}

/// converts an entity graph into the geometry collections listed in the
/// configuration, in that order.
///
/// the requested kinds and the coverage of the key sets are checked before any
/// tracing. recoverable failures of single entities are returned as warnings
/// with the entity left out; any other failure aborts the conversion.
pub fn convert(
    graph: &OsmEntityGraph,
    unique_vals: &UniqueVals,
    metadata: &SfcMetadata,
    config: &ConversionConfiguration,
) -> Result<OsmGeometryOutput, OsmError> {
    let kinds = validate_geometry_kinds(&config.geometry_kinds)?;
    let entity_kinds = kinds.iter().map(|k| k.entity_kind()).unique().collect_vec();
    attribute_ops::check_key_coverage(graph, unique_vals, &entity_kinds)?;

    log::info!(
        "converting OSM graph with {} nodes, {} ways, {} relations (missing nodes: {}, unclosed rings: {})",
        graph.n_nodes(),
        graph.n_ways(),
        graph.n_relations(),
        config.missing_node_policy,
        config.unclosed_ring_policy
    );

    let mut output = OsmGeometryOutput::default();
    for (idx, kind) in kinds.iter().enumerate() {
        log::info!("  ((({}))) assembling {}", idx + 1, kind);
        let (collection, warnings) = convert_kind(*kind, graph, unique_vals, metadata, config)?;
        log::info!(
            "assembled {} {} with {} warning(s)",
            collection.len(),
            kind,
            warnings.len()
        );
        output.push(collection, warnings);
    }
    Ok(output)
}

/// assembles and normalizes a single geometry collection.
pub fn convert_kind(
    kind: OsmGeometryKind,
    graph: &OsmEntityGraph,
    unique_vals: &UniqueVals,
    metadata: &SfcMetadata,
    config: &ConversionConfiguration,
) -> Result<(SfcCollection, Vec<ConversionWarning>), OsmError> {
    let keys = unique_vals.get(kind.entity_kind());
    let outputs = match kind {
        OsmGeometryKind::Points => get_osm_nodes(graph, keys, config)?,
        OsmGeometryKind::Lines | OsmGeometryKind::Polygons => {
            get_osm_ways(kind, graph, keys, config)?
        }
        OsmGeometryKind::MultiPolygons => get_osm_multipolygons(graph, keys, config)?,
        OsmGeometryKind::MultiLineStrings => get_osm_multilinestrings(graph, keys, config)?,
    };

    let mut entries: Vec<SfcEntry> = vec![];
    let mut attributes = AttributeTable::new(keys);
    let mut warnings: Vec<ConversionWarning> = vec![];
    for output in outputs {
        for (entry, row) in output.entries {
            attributes.push(entry.label.clone(), row)?;
            entries.push(entry);
        }
        for error in output.warnings {
            log::warn!("{kind}: {error}");
            warnings.push(ConversionWarning::new(kind, error));
        }
    }

    let collection = normalize_ops::normalize(kind, entries, attributes, metadata)?;
    Ok((collection, warnings))
}

/// rejects an empty or repeating list of geometry kinds
pub fn validate_geometry_kinds(
    kinds: &[OsmGeometryKind],
) -> Result<Vec<OsmGeometryKind>, OsmError> {
    if kinds.is_empty() {
        return Err(OsmError::InvalidArgument(String::from(
            "no geometry kinds requested",
        )));
    }
    let mut seen: HashSet<OsmGeometryKind> = HashSet::new();
    for kind in kinds {
        if !seen.insert(*kind) {
            return Err(OsmError::InvalidArgument(format!(
                "geometry kind '{kind}' requested more than once"
            )));
        }
    }
    Ok(kinds.to_vec())
}

/// runs `op` on every item, on the rayon pool when parallelized. results are
/// returned in item order regardless of completion order. recoverable errors
/// become a dropped entity with a warning.
fn map_entities<T, F>(
    items: &[T],
    parallelize: bool,
    desc: &str,
    op: F,
) -> Result<Vec<EntityOutput>, OsmError>
where
    T: Sync,
    F: Fn(&T) -> Result<EntityOutput, OsmError> + Sync + Send,
{
    let recover = |item: &T| match op(item) {
        Ok(output) => Ok(output),
        Err(e) if e.is_recoverable() => Ok(EntityOutput::dropped(vec![e])),
        Err(e) => Err(e),
    };
    if parallelize {
        items.par_iter().map(recover).collect()
    } else {
        let iter = tqdm!(items.iter(), desc = desc.to_string(), total = items.len());
        let result = iter.map(recover).collect();
        eprintln!();
        result
    }
}

fn get_osm_nodes(
    graph: &OsmEntityGraph,
    keys: &KeyIndex,
    config: &ConversionConfiguration,
) -> Result<Vec<EntityOutput>, OsmError> {
    let nodes = graph.nodes().values().collect_vec();
    map_entities(&nodes, config.parallelize, "assemble points", |node| {
        let label = node.osmid.to_string();
        let row = attribute_ops::build_row(&node.tags, keys, OsmEntityKind::Node, &label)?;
        let geometry = SfcGeometry::Point {
            node: node.osmid,
            coord: node.get_coord(),
        };
        let entry = SfcEntry::new(label.clone(), label, geometry);
        Ok(EntityOutput::single(entry, row, vec![]))
    })
}

/// open ways become lines and closed ways polygons, each in ascending OSMID order
fn get_osm_ways(
    kind: OsmGeometryKind,
    graph: &OsmEntityGraph,
    keys: &KeyIndex,
    config: &ConversionConfiguration,
) -> Result<Vec<EntityOutput>, OsmError> {
    let (closed, open) = graph.split_ways_by_closure();
    let as_polygons = kind == OsmGeometryKind::Polygons;
    let way_ids: Vec<OsmWayId> = if as_polygons { closed } else { open };
    let desc = format!("assemble {kind}");
    map_entities(&way_ids, config.parallelize, &desc, |way_id| {
        let way = graph.get_way_data(way_id)?;
        let trace = trace_way_data(way, graph.nodes(), config.missing_node_policy)?;
        let mut warnings = trace.skipped_errors();
        let geometry = if as_polygons {
            if !trace.geometry.is_closed() {
                warnings.push(OsmError::UnclosedPolygon(way.osmid));
                return Ok(EntityOutput::dropped(warnings));
            }
            SfcGeometry::Polygon(trace.geometry)
        } else {
            SfcGeometry::LineString(trace.geometry)
        };
        let label = way.osmid.to_string();
        let row = attribute_ops::build_row(&way.tags, keys, OsmEntityKind::Way, &label)?;
        let entry = SfcEntry::new(label.clone(), label, geometry);
        Ok(EntityOutput::single(entry, row, warnings))
    })
}

fn get_osm_multipolygons(
    graph: &OsmEntityGraph,
    keys: &KeyIndex,
    config: &ConversionConfiguration,
) -> Result<Vec<EntityOutput>, OsmError> {
    let relations = graph.relations().iter().filter(|r| r.is_polygon).collect_vec();
    map_entities(&relations, config.parallelize, "assemble multipolygons", |relation| {
        let label = relation.osmid.to_string();
        let row = attribute_ops::build_row(&relation.tags, keys, OsmEntityKind::Relation, &label)?;
        let trace = trace_multipolygon(
            relation,
            graph,
            config.missing_node_policy,
            config.unclosed_ring_policy,
        )?;
        let geometry = SfcGeometry::MultiPolygon { rings: trace.rings };
        let entry = SfcEntry::new(label.clone(), label, geometry);
        Ok(EntityOutput::single(entry, row, trace.warnings))
    })
}

/// one entry per distinct role of each relation, each with a copy of the
/// relation's attribute row
fn get_osm_multilinestrings(
    graph: &OsmEntityGraph,
    keys: &KeyIndex,
    config: &ConversionConfiguration,
) -> Result<Vec<EntityOutput>, OsmError> {
    let relations = graph.relations().iter().filter(|r| !r.is_polygon).collect_vec();
    map_entities(&relations, config.parallelize, "assemble multilinestrings", |relation| {
        let osm_id = relation.osmid.to_string();
        let row = attribute_ops::build_row(&relation.tags, keys, OsmEntityKind::Relation, &osm_id)?;
        let trace = trace_multilinestring(relation, graph, config.missing_node_policy)?;
        let entries = trace
            .linestrings
            .into_iter()
            .map(|ls| {
                let entry = SfcEntry::new(
                    ls.label,
                    osm_id.clone(),
                    SfcGeometry::MultiLineString(ls.geometry),
                )
                .with_role(&ls.role);
                (entry, row.clone())
            })
            .collect_vec();
        Ok(EntityOutput {
            entries,
            warnings: trace.warnings,
        })
    })
}
