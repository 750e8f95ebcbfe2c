use serde::{Deserialize, Serialize};

/// extent of the source dataset. computed outside of the conversion and
/// attached unchanged to every output collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl BoundingBox {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> BoundingBox {
        BoundingBox {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crs {
    pub epsg: Option<i32>,
    pub proj4string: Option<String>,
}

impl Crs {
    pub const WGS84_EPSG: i32 = 4326;
    pub const WGS84_PROJ4: &'static str = "+proj=longlat +datum=WGS84 +no_defs";
}

impl Default for Crs {
    fn default() -> Self {
        Crs {
            epsg: Some(Self::WGS84_EPSG),
            proj4string: Some(String::from(Self::WGS84_PROJ4)),
        }
    }
}

/// pass-through metadata of a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SfcMetadata {
    pub bbox: BoundingBox,
    #[serde(default)]
    pub crs: Crs,
}

impl SfcMetadata {
    pub fn new(bbox: BoundingBox, crs: Crs) -> SfcMetadata {
        SfcMetadata { bbox, crs }
    }
}
