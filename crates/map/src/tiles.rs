/// Base tile layer configuration.
///
/// The component ships with a single fixed provider; the substrate fetches
/// the actual imagery and may finish before or after feature layers render.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: f64,
    pub subdomains: Vec<char>,
}

impl TileSource {
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            max_zoom: 19.0,
            subdomains: vec!['a', 'b', 'c'],
        }
    }

    /// Expands the URL template for one tile, rotating subdomains so
    /// neighboring tiles spread across hosts.
    pub fn url_for(&self, z: u32, x: u32, y: u32) -> String {
        let mut url = self
            .url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string());
        if !self.subdomains.is_empty() {
            let s = self.subdomains[(x + y) as usize % self.subdomains.len()];
            url = url.replace("{s}", &s.to_string());
        }
        url
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self::openstreetmap()
    }
}
