use formats::{ProjectStatus, RoadProperties};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Shown for features whose status is missing or outside the enumeration.
pub const FALLBACK_COLOR: Rgb = Rgb::new(0x6b, 0x72, 0x80);

/// Status → display color. Total over all inputs.
pub fn status_color(status: Option<ProjectStatus>) -> Rgb {
    let Some(status) = status else {
        return FALLBACK_COLOR;
    };
    match status {
        ProjectStatus::Pending => Rgb::new(0x9c, 0xa3, 0xaf),
        ProjectStatus::Approved => Rgb::new(0x3b, 0x82, 0xf6),
        ProjectStatus::Active => Rgb::new(0xf5, 0x9e, 0x0b),
        ProjectStatus::Completed => Rgb::new(0x10, 0xb9, 0x81),
        ProjectStatus::Maintenance => Rgb::new(0x8b, 0x5c, 0xf6),
        ProjectStatus::Delayed => Rgb::new(0xef, 0x44, 0x44),
        ProjectStatus::Cancelled => Rgb::new(0x4b, 0x55, 0x63),
    }
}

/// Stroke weight for the road overlay, in pixels.
pub const STROKE_WEIGHT: f32 = 4.0;
/// Stroke opacity for the road overlay.
pub const STROKE_OPACITY: f32 = 0.8;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FeatureStyle {
    pub color: Rgb,
    pub weight: f32,
    pub opacity: f32,
}

/// Derives the visual style for one feature. Pure; only the color varies
/// with the data.
pub fn style_for(properties: &RoadProperties) -> FeatureStyle {
    FeatureStyle {
        color: status_color(properties.status),
        weight: STROKE_WEIGHT,
        opacity: STROKE_OPACITY,
    }
}
