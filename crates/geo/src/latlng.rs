/// Geographic coordinates in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLng {
    pub lat_deg: f64,
    pub lng_deg: f64,
}

impl LatLng {
    pub const fn new(lat_deg: f64, lng_deg: f64) -> Self {
        Self { lat_deg, lng_deg }
    }

    pub fn is_finite(&self) -> bool {
        self.lat_deg.is_finite() && self.lng_deg.is_finite()
    }
}
