use geo::{LatLng, LatLngBounds};
use serde_json::Value;
use tracing::warn;

use crate::properties::RoadProperties;

/// Road geometry in geographic coordinates.
///
/// GeoJSON positions are `[lon, lat]`; vertices are stored as `LatLng`.
/// Points are not a road shape and are rejected at decode.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    LineString(Vec<LatLng>),
    MultiLineString(Vec<Vec<LatLng>>),
    Polygon(Vec<Vec<LatLng>>),
    MultiPolygon(Vec<Vec<Vec<LatLng>>>),
}

impl Geometry {
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::LineString(points) => points.len(),
            Geometry::MultiLineString(lines) => lines.iter().map(Vec::len).sum(),
            Geometry::Polygon(rings) => rings.iter().map(Vec::len).sum(),
            Geometry::MultiPolygon(polys) => polys
                .iter()
                .map(|rings| rings.iter().map(Vec::len).sum::<usize>())
                .sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Combined bounds over all finite vertices; `None` when nothing is
    /// renderable.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        self.for_each_vertex(|point| match &mut bounds {
            Some(b) => b.extend(point),
            None => bounds = LatLngBounds::from_point(point),
        });
        bounds
    }

    fn for_each_vertex<F: FnMut(LatLng)>(&self, mut f: F) {
        match self {
            Geometry::LineString(points) => {
                for p in points {
                    f(*p);
                }
            }
            Geometry::MultiLineString(lines) => {
                for line in lines {
                    for p in line {
                        f(*p);
                    }
                }
            }
            Geometry::Polygon(rings) => {
                for ring in rings {
                    for p in ring {
                        f(*p);
                    }
                }
            }
            Geometry::MultiPolygon(polys) => {
                for rings in polys {
                    for ring in rings {
                        for p in ring {
                            f(*p);
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: RoadProperties,
}

/// One data version of the map's input.
///
/// Decoding is lenient per feature: a feature that cannot be turned into a
/// renderable road is skipped (and counted), never fatal to its siblings.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    pub skipped: usize,
}

#[derive(Debug)]
pub enum GeoJsonError {
    Parse(serde_json::Error),
    NotAFeatureCollection,
}

impl std::fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoJsonError::Parse(e) => write!(f, "JSON parse error: {e}"),
            GeoJsonError::NotAFeatureCollection => {
                write!(f, "expected a GeoJSON FeatureCollection")
            }
        }
    }
}

impl std::error::Error for GeoJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoJsonError::Parse(e) => Some(e),
            GeoJsonError::NotAFeatureCollection => None,
        }
    }
}

impl FeatureCollection {
    pub fn from_geojson_str(payload: &str) -> Result<Self, GeoJsonError> {
        let value: Value = serde_json::from_str(payload).map_err(GeoJsonError::Parse)?;
        Self::from_geojson_value(&value)
    }

    pub fn from_geojson_value(value: &Value) -> Result<Self, GeoJsonError> {
        let obj = value
            .as_object()
            .ok_or(GeoJsonError::NotAFeatureCollection)?;
        let ty = obj
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or(GeoJsonError::NotAFeatureCollection)?;
        if ty != "FeatureCollection" {
            return Err(GeoJsonError::NotAFeatureCollection);
        }

        let features_val = obj
            .get("features")
            .and_then(|v| v.as_array())
            .ok_or(GeoJsonError::NotAFeatureCollection)?;

        let mut features = Vec::with_capacity(features_val.len());
        let mut skipped = 0usize;
        for (index, feat_val) in features_val.iter().enumerate() {
            match parse_feature(feat_val) {
                Ok(feature) => features.push(feature),
                Err(reason) => {
                    warn!(index, %reason, "skipping malformed feature");
                    skipped += 1;
                }
            }
        }

        Ok(Self { features, skipped })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

fn parse_feature(value: &Value) -> Result<Feature, String> {
    let obj = value
        .as_object()
        .ok_or("feature must be an object".to_string())?;

    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("feature missing type".to_string())?;
    if ty != "Feature" {
        return Err(format!("unexpected feature type: {ty}"));
    }

    let geometry_val = obj
        .get("geometry")
        .ok_or("feature missing geometry".to_string())?;
    let geometry = parse_geometry(geometry_val)?;

    let props = obj
        .get("properties")
        .and_then(|v| v.as_object())
        .ok_or("feature missing properties".to_string())?;
    let properties = RoadProperties::from_map(props).map_err(|e| e.to_string())?;

    Ok(Feature {
        geometry,
        properties,
    })
}

fn parse_geometry(value: &Value) -> Result<Geometry, String> {
    let obj = value
        .as_object()
        .ok_or("geometry must be an object".to_string())?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("geometry missing type".to_string())?;

    let coords = obj
        .get("coordinates")
        .ok_or("geometry missing coordinates".to_string())?;

    match ty {
        "LineString" => Ok(Geometry::LineString(parse_points(coords)?)),
        "MultiLineString" => Ok(Geometry::MultiLineString(parse_lines(coords)?)),
        "Polygon" => Ok(Geometry::Polygon(parse_lines(coords)?)),
        "MultiPolygon" => Ok(Geometry::MultiPolygon(parse_multi_polygon(coords)?)),
        other => Err(format!("unsupported geometry type: {other}")),
    }
}

fn parse_point(value: &Value) -> Result<LatLng, String> {
    let arr = value
        .as_array()
        .ok_or("position must be an array".to_string())?;
    if arr.len() < 2 {
        return Err("position must have [lon, lat]".to_string());
    }
    let lon = arr[0].as_f64().ok_or("lon must be a number".to_string())?;
    let lat = arr[1].as_f64().ok_or("lat must be a number".to_string())?;
    Ok(LatLng::new(lat, lon))
}

fn parse_points(coords: &Value) -> Result<Vec<LatLng>, String> {
    let arr = coords
        .as_array()
        .ok_or("coordinates must be an array".to_string())?;
    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        out.push(parse_point(item)?);
    }
    Ok(out)
}

fn parse_lines(coords: &Value) -> Result<Vec<Vec<LatLng>>, String> {
    let arr = coords
        .as_array()
        .ok_or("coordinates must be a nested array".to_string())?;
    let mut out = Vec::with_capacity(arr.len());
    for line in arr {
        out.push(parse_points(line)?);
    }
    Ok(out)
}

fn parse_multi_polygon(coords: &Value) -> Result<Vec<Vec<Vec<LatLng>>>, String> {
    let arr = coords
        .as_array()
        .ok_or("MultiPolygon coordinates must be an array".to_string())?;
    let mut out = Vec::with_capacity(arr.len());
    for poly in arr {
        out.push(parse_lines(poly)?);
    }
    Ok(out)
}
