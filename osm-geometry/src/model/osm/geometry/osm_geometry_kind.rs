use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::osm::{graph::OsmEntityKind, OsmError};

/// the output collections a conversion can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OsmGeometryKind {
    /// every node, as a point
    Points,
    /// open ways
    Lines,
    /// closed ways
    Polygons,
    /// polygon-type relations
    MultiPolygons,
    /// all other relations, one entry per member role
    MultiLineStrings,
}

impl OsmGeometryKind {
    pub const ALL: [OsmGeometryKind; 5] = [
        OsmGeometryKind::Points,
        OsmGeometryKind::Lines,
        OsmGeometryKind::Polygons,
        OsmGeometryKind::MultiPolygons,
        OsmGeometryKind::MultiLineStrings,
    ];

    /// simple features geometry type name of the entries in this collection
    pub fn sfc_type(&self) -> &'static str {
        match self {
            OsmGeometryKind::Points => "POINT",
            OsmGeometryKind::Lines => "LINESTRING",
            OsmGeometryKind::Polygons => "POLYGON",
            OsmGeometryKind::MultiPolygons => "MULTIPOLYGON",
            OsmGeometryKind::MultiLineStrings => "MULTILINESTRING",
        }
    }

    /// the entity kind whose key set provides the attribute columns
    pub fn entity_kind(&self) -> OsmEntityKind {
        match self {
            OsmGeometryKind::Points => OsmEntityKind::Node,
            OsmGeometryKind::Lines | OsmGeometryKind::Polygons => OsmEntityKind::Way,
            OsmGeometryKind::MultiPolygons | OsmGeometryKind::MultiLineStrings => {
                OsmEntityKind::Relation
            }
        }
    }
}

impl Display for OsmGeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsmGeometryKind::Points => write!(f, "points"),
            OsmGeometryKind::Lines => write!(f, "lines"),
            OsmGeometryKind::Polygons => write!(f, "polygons"),
            OsmGeometryKind::MultiPolygons => write!(f, "multipolygons"),
            OsmGeometryKind::MultiLineStrings => write!(f, "multilinestrings"),
        }
    }
}

impl FromStr for OsmGeometryKind {
    type Err = OsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "points" => Ok(OsmGeometryKind::Points),
            "lines" | "linestrings" => Ok(OsmGeometryKind::Lines),
            "polygons" => Ok(OsmGeometryKind::Polygons),
            "multipolygons" => Ok(OsmGeometryKind::MultiPolygons),
            "multilinestrings" => Ok(OsmGeometryKind::MultiLineStrings),
            _ => Err(OsmError::UnsupportedGeometryKind(String::from(s))),
        }
    }
}

impl TryFrom<String> for OsmGeometryKind {
    type Error = OsmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        OsmGeometryKind::from_str(&value)
    }
}

impl From<OsmGeometryKind> for String {
    fn from(value: OsmGeometryKind) -> Self {
        value.to_string()
    }
}
