use formats::{Feature, Geometry};
use geo::LatLngBounds;
use tracing::warn;

use crate::popup::{Popup, render_popup};
use crate::symbology::{FeatureStyle, style_for};

/// One rendered, interactive road on the viewport.
///
/// Layers are ephemeral: built fresh from a feature-collection version and
/// discarded wholesale on the next one, never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadLayer {
    pub geometry: Geometry,
    pub style: FeatureStyle,
    pub popup: Popup,
    pub project_id: i64,
    pub bounds: LatLngBounds,
}

/// Builds the layer for one feature.
///
/// A feature whose geometry has no finite vertex is not renderable and is
/// skipped; the caller continues with its siblings.
pub fn build_layer(feature: &Feature) -> Option<RoadLayer> {
    let Some(bounds) = feature.geometry.bounds() else {
        warn!(
            project_id = feature.properties.project_id,
            "skipping feature with no renderable geometry"
        );
        return None;
    };

    Some(RoadLayer {
        geometry: feature.geometry.clone(),
        style: style_for(&feature.properties),
        popup: render_popup(&feature.properties),
        project_id: feature.properties.project_id,
        bounds,
    })
}
