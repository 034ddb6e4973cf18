use crate::bounds::LatLngBounds;
use crate::latlng::LatLng;

/// Spherical Web Mercator, normalized to the unit square.
///
/// `x` grows east from the antimeridian, `y` grows south from the north
/// clamp latitude. At zoom `z` the world spans `TILE_SIZE_PX * 2^z` pixels.
pub const TILE_SIZE_PX: f64 = 256.0;

/// Latitude bound of the square Web Mercator world: atan(sinh(pi)).
pub const MAX_LATITUDE_DEG: f64 = 85.051_128_779_806_6;

/// A point in normalized world coordinates, both axes in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn project(point: LatLng) -> WorldPoint {
    let lat = point
        .lat_deg
        .clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG)
        .to_radians();
    let x = (point.lng_deg + 180.0) / 360.0;
    let y = 0.5 - (std::f64::consts::FRAC_PI_4 + lat * 0.5).tan().ln() / std::f64::consts::TAU;
    WorldPoint::new(x, y)
}

pub fn unproject(point: WorldPoint) -> LatLng {
    let lng = point.x * 360.0 - 180.0;
    let lat = 2.0 * ((0.5 - point.y) * std::f64::consts::TAU).exp().atan()
        - std::f64::consts::FRAC_PI_2;
    LatLng::new(lat.to_degrees(), lng)
}

/// Largest integral zoom at which `bounds` fits inside a `width_px` x
/// `height_px` viewport with `padding_px` of margin on every side.
///
/// Degenerate (point-sized) bounds resolve to `max_zoom`. The result is
/// clamped to `[0, max_zoom]`.
pub fn zoom_for_bounds(
    bounds: LatLngBounds,
    width_px: f64,
    height_px: f64,
    padding_px: f64,
    max_zoom: f64,
) -> f64 {
    let sw = project(bounds.south_west());
    let ne = project(bounds.north_east());
    let extent_x = (ne.x - sw.x).abs();
    let extent_y = (sw.y - ne.y).abs();

    let usable_w = (width_px - 2.0 * padding_px).max(1.0);
    let usable_h = (height_px - 2.0 * padding_px).max(1.0);

    let zoom_x = axis_zoom(extent_x, usable_w, max_zoom);
    let zoom_y = axis_zoom(extent_y, usable_h, max_zoom);

    zoom_x.min(zoom_y).floor().clamp(0.0, max_zoom)
}

fn axis_zoom(extent_world: f64, usable_px: f64, max_zoom: f64) -> f64 {
    if extent_world <= 0.0 {
        return max_zoom;
    }
    (usable_px / (extent_world * TILE_SIZE_PX)).log2()
}
