use geo::{LatLng, LatLngBounds, zoom_for_bounds};

use crate::tiles::TileSource;

/// Default view: a national-scale overview.
pub const DEFAULT_CENTER: LatLng = LatLng::new(20.5937, 78.9629);
pub const DEFAULT_ZOOM: f64 = 5.0;

/// Margin kept around fitted content, in pixels per side.
pub const FIT_PADDING_PX: f64 = 50.0;

/// Surfaces shorter than this render at this height anyway.
pub const MIN_SURFACE_HEIGHT_PX: u32 = 500;

/// The mount target the viewport draws into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Surface {
    pub width_px: u32,
    pub height_px: u32,
}

impl Surface {
    pub const fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    pub fn render_height_px(&self) -> u32 {
        self.height_px.max(MIN_SURFACE_HEIGHT_PX)
    }
}

/// The live map display: center, zoom, base imagery, mount surface.
///
/// Owned exclusively by the component that created it; the host never
/// mutates it directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    center: LatLng,
    zoom: f64,
    surface: Surface,
    base: TileSource,
}

impl Viewport {
    pub fn new(surface: Surface, base: TileSource, center: LatLng, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            surface,
            base,
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn base(&self) -> &TileSource {
        &self.base
    }

    /// Recenters and rezooms so `bounds` is fully visible with the fixed
    /// padding margin, capped at the base layer's max zoom.
    pub fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.center = bounds.center();
        self.zoom = zoom_for_bounds(
            bounds,
            f64::from(self.surface.width_px),
            f64::from(self.surface.render_height_px()),
            FIT_PADDING_PX,
            self.base.max_zoom,
        );
    }
}
