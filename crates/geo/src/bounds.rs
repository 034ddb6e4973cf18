use crate::latlng::LatLng;

/// Axis-aligned geographic bounding box.
///
/// `extend` ignores non-finite points, so bounds built over dirty input
/// stay usable as long as at least one vertex was finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLngBounds {
    south_west: LatLng,
    north_east: LatLng,
}

impl LatLngBounds {
    pub fn from_point(point: LatLng) -> Option<Self> {
        if !point.is_finite() {
            return None;
        }
        Some(Self {
            south_west: point,
            north_east: point,
        })
    }

    pub fn from_points<I: IntoIterator<Item = LatLng>>(points: I) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for point in points {
            match &mut bounds {
                Some(b) => b.extend(point),
                None => bounds = Self::from_point(point),
            }
        }
        bounds
    }

    pub fn extend(&mut self, point: LatLng) {
        if !point.is_finite() {
            return;
        }
        self.south_west.lat_deg = self.south_west.lat_deg.min(point.lat_deg);
        self.south_west.lng_deg = self.south_west.lng_deg.min(point.lng_deg);
        self.north_east.lat_deg = self.north_east.lat_deg.max(point.lat_deg);
        self.north_east.lng_deg = self.north_east.lng_deg.max(point.lng_deg);
    }

    pub fn extend_bounds(&mut self, other: Self) {
        self.extend(other.south_west);
        self.extend(other.north_east);
    }

    pub fn south_west(&self) -> LatLng {
        self.south_west
    }

    pub fn north_east(&self) -> LatLng {
        self.north_east
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat_deg + self.north_east.lat_deg) * 0.5,
            (self.south_west.lng_deg + self.north_east.lng_deg) * 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::LatLngBounds;
    use crate::latlng::LatLng;

    #[test]
    fn extends_to_cover_points() {
        let mut b = LatLngBounds::from_point(LatLng::new(18.5, 73.8)).unwrap();
        b.extend(LatLng::new(19.1, 72.9));
        assert_eq!(b.south_west(), LatLng::new(18.5, 72.9));
        assert_eq!(b.north_east(), LatLng::new(19.1, 73.8));
    }

    #[test]
    fn ignores_non_finite_points() {
        let mut b = LatLngBounds::from_point(LatLng::new(10.0, 10.0)).unwrap();
        b.extend(LatLng::new(f64::NAN, 50.0));
        assert_eq!(b.north_east(), LatLng::new(10.0, 10.0));
        assert!(LatLngBounds::from_point(LatLng::new(f64::NAN, 0.0)).is_none());
    }

    #[test]
    fn center_is_midpoint() {
        let b = LatLngBounds::from_points([LatLng::new(10.0, 20.0), LatLng::new(20.0, 40.0)])
            .unwrap();
        assert_eq!(b.center(), LatLng::new(15.0, 30.0));
    }

    #[test]
    fn from_points_on_empty_iterator() {
        assert!(LatLngBounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn merges_bounds() {
        let mut a = LatLngBounds::from_point(LatLng::new(0.0, 0.0)).unwrap();
        let b = LatLngBounds::from_points([LatLng::new(-5.0, 2.0), LatLng::new(1.0, 7.0)])
            .unwrap();
        a.extend_bounds(b);
        assert_eq!(a.south_west(), LatLng::new(-5.0, 0.0));
        assert_eq!(a.north_east(), LatLng::new(1.0, 7.0));
    }
}
