use formats::FeatureCollection;
use geo::{LatLng, LatLngBounds};
use tracing::debug;

use crate::interaction::{ClickBridge, FeatureClickHandler};
use crate::layer::{RoadLayer, build_layer};
use crate::popup::Popup;
use crate::tiles::TileSource;
use crate::viewport::{DEFAULT_CENTER, DEFAULT_ZOOM, Surface, Viewport};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AcquireOutcome {
    /// First acquire with a live surface; the viewport now exists.
    Created,
    /// A viewport already exists for this instance; nothing changed.
    AlreadyLive,
    /// No surface is mounted yet; the caller retries on the next
    /// lifecycle opportunity.
    Deferred,
}

/// The interactive road-project map.
///
/// One instance owns at most one live viewport and at most one installed
/// layer set. The host drives it through three events: `acquire` on mount,
/// `sync` on every data change, `release` on unmount. Acquire always
/// precedes sync; release is unconditional.
pub struct MapView {
    viewport: Option<Viewport>,
    layers: Vec<RoadLayer>,
    click: ClickBridge,
    initial_center: LatLng,
    initial_zoom: f64,
}

impl MapView {
    pub fn new(on_feature_click: Option<FeatureClickHandler>) -> Self {
        Self::with_initial_view(DEFAULT_CENTER, DEFAULT_ZOOM, on_feature_click)
    }

    pub fn with_initial_view(
        center: LatLng,
        zoom: f64,
        on_feature_click: Option<FeatureClickHandler>,
    ) -> Self {
        Self {
            viewport: None,
            layers: Vec::new(),
            click: ClickBridge::new(on_feature_click),
            initial_center: center,
            initial_zoom: zoom,
        }
    }

    /// Creates the viewport on the mounted surface. Idempotent: a second
    /// call, or a call before the surface exists, changes nothing.
    pub fn acquire(&mut self, surface: Option<Surface>) -> AcquireOutcome {
        if self.viewport.is_some() {
            return AcquireOutcome::AlreadyLive;
        }
        let Some(surface) = surface else {
            return AcquireOutcome::Deferred;
        };

        self.viewport = Some(Viewport::new(
            surface,
            TileSource::openstreetmap(),
            self.initial_center,
            self.initial_zoom,
        ));
        AcquireOutcome::Created
    }

    /// Tears down the viewport and every installed layer. Safe to call
    /// without a prior acquire, and mandatory on unmount.
    pub fn release(&mut self) {
        self.layers.clear();
        self.viewport = None;
    }

    /// Installs the layer set for a new data version.
    ///
    /// The previous set is removed in full before anything is added. Each
    /// buildable feature becomes one layer; unbuildable ones are skipped.
    /// A non-empty result reframes the viewport over the combined bounds;
    /// an empty one leaves center and zoom untouched.
    pub fn sync(&mut self, data: Option<&FeatureCollection>) {
        let Some(viewport) = &mut self.viewport else {
            return;
        };
        let Some(collection) = data else {
            return;
        };

        self.layers.clear();

        let mut combined: Option<LatLngBounds> = None;
        for feature in &collection.features {
            let Some(layer) = build_layer(feature) else {
                continue;
            };
            match &mut combined {
                Some(b) => b.extend_bounds(layer.bounds),
                None => combined = Some(layer.bounds),
            }
            self.layers.push(layer);
        }

        debug!(
            installed = self.layers.len(),
            features = collection.len(),
            "layer sync complete"
        );

        if let Some(bounds) = combined {
            viewport.fit_bounds(bounds);
        }
    }

    /// Handles a pointer activation on the layer at `index`: fires the
    /// host callback with the project id and hands back the popup to show.
    /// Out-of-range indices activate nothing.
    pub fn feature_clicked(&self, index: usize) -> Option<&Popup> {
        let layer = self.layers.get(index)?;
        self.click.activate(layer.project_id);
        Some(&layer.popup)
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn layers(&self) -> &[RoadLayer] {
        &self.layers
    }

    pub fn is_live(&self) -> bool {
        self.viewport.is_some()
    }
}

impl std::fmt::Debug for MapView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapView")
            .field("live", &self.viewport.is_some())
            .field("layers", &self.layers.len())
            .field("click", &self.click)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{AcquireOutcome, MapView};
    use crate::symbology::status_color;
    use crate::viewport::{DEFAULT_CENTER, DEFAULT_ZOOM, Surface};
    use formats::{FeatureCollection, ProjectStatus};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::cell::RefCell;
    use std::rc::Rc;

    const SURFACE: Surface = Surface::new(800, 600);

    fn road(id: i64, name: &str, district: &str, status: &str, coords: Value) -> Value {
        json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": coords },
            "properties": {
                "project_id": id,
                "project_name": name,
                "district": district,
                "status": status,
            },
        })
    }

    fn collection(features: Value) -> FeatureCollection {
        FeatureCollection::from_geojson_value(&json!({
            "type": "FeatureCollection",
            "features": features,
        }))
        .unwrap()
    }

    fn three_roads() -> FeatureCollection {
        collection(json!([
            road(1, "NH-4", "Pune", "active", json!([[73.8, 18.5], [73.9, 18.6]])),
            road(2, "SH-27", "Nashik", "pending", json!([[73.7, 19.9], [73.8, 20.0]])),
            road(3, "NH-48", "Satara", "completed", json!([[74.0, 17.6], [74.1, 17.7]])),
        ]))
    }

    #[test]
    fn acquire_is_idempotent_per_mount() {
        let mut view = MapView::new(None);
        assert_eq!(view.acquire(Some(SURFACE)), AcquireOutcome::Created);
        assert_eq!(view.acquire(Some(SURFACE)), AcquireOutcome::AlreadyLive);
        assert!(view.is_live());
    }

    #[test]
    fn acquire_defers_until_surface_exists() {
        let mut view = MapView::new(None);
        assert_eq!(view.acquire(None), AcquireOutcome::Deferred);
        assert!(!view.is_live());
        assert_eq!(view.acquire(Some(SURFACE)), AcquireOutcome::Created);
    }

    #[test]
    fn sync_before_acquire_is_a_no_op() {
        let mut view = MapView::new(None);
        view.sync(Some(&three_roads()));
        assert!(view.layers().is_empty());
    }

    #[test]
    fn sync_installs_one_layer_per_feature() {
        let mut view = MapView::new(None);
        view.acquire(Some(SURFACE));
        view.sync(Some(&three_roads()));
        assert_eq!(view.layers().len(), 3);
    }

    #[test]
    fn replacement_never_mixes_stale_and_fresh_layers() {
        let mut view = MapView::new(None);
        view.acquire(Some(SURFACE));
        view.sync(Some(&three_roads()));

        let one = collection(json!([
            road(9, "ORR", "Hyderabad", "active", json!([[78.3, 17.3], [78.5, 17.5]])),
        ]));
        view.sync(Some(&one));

        assert_eq!(view.layers().len(), 1);
        assert_eq!(view.layers()[0].project_id, 9);
    }

    #[test]
    fn empty_collection_clears_layers_and_keeps_the_view() {
        let mut view = MapView::new(None);
        view.acquire(Some(SURFACE));
        view.sync(Some(&three_roads()));
        let framed_center = view.viewport().unwrap().center();
        let framed_zoom = view.viewport().unwrap().zoom();

        view.sync(Some(&collection(json!([]))));
        assert!(view.layers().is_empty());
        assert_eq!(view.viewport().unwrap().center(), framed_center);
        assert_eq!(view.viewport().unwrap().zoom(), framed_zoom);
    }

    #[test]
    fn absent_data_is_a_no_op() {
        let mut view = MapView::new(None);
        view.acquire(Some(SURFACE));
        view.sync(None);
        assert!(view.layers().is_empty());
        assert_eq!(view.viewport().unwrap().center(), DEFAULT_CENTER);
        assert_eq!(view.viewport().unwrap().zoom(), DEFAULT_ZOOM);
    }

    #[test]
    fn sync_reframes_over_installed_content() {
        let mut view = MapView::new(None);
        view.acquire(Some(SURFACE));
        view.sync(Some(&three_roads()));
        let vp = view.viewport().unwrap();
        assert_ne!(vp.center(), DEFAULT_CENTER);
        assert!(vp.zoom() >= DEFAULT_ZOOM);
    }

    #[test]
    fn unrenderable_feature_skips_without_aborting_sync() {
        let mut view = MapView::new(None);
        view.acquire(Some(SURFACE));
        view.sync(Some(&collection(json!([
            road(1, "NH-4", "Pune", "active", json!([[73.8, 18.5], [73.9, 18.6]])),
            road(2, "Ghost", "Nowhere", "active", json!([])),
            road(3, "NH-48", "Satara", "completed", json!([[74.0, 17.6], [74.1, 17.7]])),
        ]))));
        assert_eq!(view.layers().len(), 2);
        assert_eq!(view.layers()[1].project_id, 3);
    }

    #[test]
    fn release_then_reacquire_yields_a_fresh_viewport() {
        let mut view = MapView::new(None);
        view.acquire(Some(SURFACE));
        view.sync(Some(&three_roads()));
        view.release();
        assert!(!view.is_live());
        assert!(view.layers().is_empty());

        assert_eq!(view.acquire(Some(SURFACE)), AcquireOutcome::Created);
        assert!(view.layers().is_empty());
        assert_eq!(view.viewport().unwrap().center(), DEFAULT_CENTER);
    }

    #[test]
    fn release_without_acquire_is_safe() {
        let mut view = MapView::new(None);
        view.release();
        view.release();
        assert!(!view.is_live());
    }

    #[test]
    fn delayed_road_scenario() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicked);
        let mut view = MapView::new(Some(Box::new(move |id| sink.borrow_mut().push(id))));
        view.acquire(Some(SURFACE));
        view.sync(Some(&collection(json!([
            road(42, "NH-44 Widening", "Pune", "delayed", json!([[73.8, 18.5], [73.9, 18.6]])),
        ]))));

        assert_eq!(view.layers().len(), 1);
        let layer = &view.layers()[0];
        assert_eq!(layer.style.color, status_color(Some(ProjectStatus::Delayed)));
        assert_eq!(layer.popup.title, "NH-44 Widening");
        assert_eq!(layer.popup.subtitle, "Pune");
        assert_eq!(layer.popup.contractor, "N/A");
        assert_eq!(layer.popup.detail.route(), "/projects/42");

        let popup = view.feature_clicked(0).unwrap();
        assert_eq!(popup.title, "NH-44 Widening");
        assert_eq!(*clicked.borrow(), vec![42]);
    }

    #[test]
    fn clicking_without_a_callback_does_not_panic() {
        let mut view = MapView::new(None);
        view.acquire(Some(SURFACE));
        view.sync(Some(&three_roads()));
        assert!(view.feature_clicked(0).is_some());
        assert!(view.feature_clicked(99).is_none());
    }
}
