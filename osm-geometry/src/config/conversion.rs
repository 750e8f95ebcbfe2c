use crate::{
    algorithm::{assembly::UnclosedRingPolicy, trace::MissingNodePolicy},
    model::{osm::geometry::OsmGeometryKind, OsmCliError},
};
use serde::{Deserialize, Serialize};

/// defines behaviors for converting an OSM entity graph into geometry collections
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ConversionConfiguration {
    pub missing_node_policy: MissingNodePolicy,
    pub unclosed_ring_policy: UnclosedRingPolicy,
    pub parallelize: bool,
    /// collections to assemble, in output order
    pub geometry_kinds: Vec<OsmGeometryKind>,
}

impl Default for ConversionConfiguration {
    fn default() -> Self {
        Self {
            missing_node_policy: MissingNodePolicy::default(),
            unclosed_ring_policy: UnclosedRingPolicy::default(),
            parallelize: true,
            geometry_kinds: OsmGeometryKind::ALL.to_vec(),
        }
    }
}

impl TryFrom<&String> for ConversionConfiguration {
    type Error = OsmCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(OsmCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConversionConfiguration;
    use crate::{
        algorithm::{assembly::UnclosedRingPolicy, trace::MissingNodePolicy},
        model::{osm::geometry::OsmGeometryKind, OsmCliError},
    };
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("test invariant: temp file created");
        file.write_all(contents.as_bytes())
            .expect("test invariant: temp file written");
        file
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let file = write_temp(
            ".toml",
            r#"
missing_node_policy = "skip"
geometry_kinds = ["multipolygons", "points"]
"#,
        );
        let path = file.path().to_string_lossy().to_string();
        match ConversionConfiguration::try_from(&path) {
            Ok(conf) => {
                assert_eq!(conf.missing_node_policy, MissingNodePolicy::Skip);
                assert_eq!(conf.unclosed_ring_policy, UnclosedRingPolicy::Flag);
                assert!(conf.parallelize);
                assert_eq!(
                    conf.geometry_kinds,
                    vec![OsmGeometryKind::MultiPolygons, OsmGeometryKind::Points]
                );
            }
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn json_configuration() {
        let file = write_temp(
            ".json",
            r#"{"unclosed_ring_policy": "reject", "parallelize": false}"#,
        );
        let path = file.path().to_string_lossy().to_string();
        match ConversionConfiguration::try_from(&path) {
            Ok(conf) => {
                assert_eq!(conf.unclosed_ring_policy, UnclosedRingPolicy::Reject);
                assert!(!conf.parallelize);
                assert_eq!(conf.geometry_kinds, OsmGeometryKind::ALL.to_vec());
            }
            Err(e) => panic!("{e}"),
        }
    }

    #[test]
    fn unknown_geometry_kind_is_rejected() {
        let file = write_temp(".toml", r#"geometry_kinds = ["hexagons"]"#);
        let path = file.path().to_string_lossy().to_string();
        match ConversionConfiguration::try_from(&path) {
            Err(OsmCliError::ConfigurationError(msg)) => {
                assert!(msg.contains("unsupported geometry kind 'hexagons'"), "{msg}");
            }
            other => panic!("expected configuration error, found {other:?}"),
        }

        let json = write_temp(".json", r#"{"geometry_kinds": ["points", "hexagons"]}"#);
        let path = json.path().to_string_lossy().to_string();
        match ConversionConfiguration::try_from(&path) {
            Err(OsmCliError::ConfigurationError(msg)) => {
                assert!(msg.contains("unsupported geometry kind 'hexagons'"), "{msg}");
            }
            other => panic!("expected configuration error, found {other:?}"),
        }
    }

    #[test]
    fn unsupported_extension() {
        let result = ConversionConfiguration::try_from(&String::from("conversion.yaml"));
        assert!(matches!(result, Err(OsmCliError::ConfigurationError(_))));
    }
}
