use formats::RoadProperties;

/// In-popup navigation affordance. Activating it asks the host to route to
/// the project detail view; it works independently of the click callback.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DetailAction {
    pub project_id: i64,
}

impl DetailAction {
    pub fn route(&self) -> String {
        format!("/projects/{}", self.project_id)
    }
}

/// Structured popup content for one road feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub title: String,
    pub subtitle: String,
    pub status: String,
    pub contractor: String,
    pub detail: DetailAction,
}

/// Builds the popup summary. Missing optional fields render as their
/// placeholders; this never fails.
pub fn render_popup(properties: &RoadProperties) -> Popup {
    let subtitle = match &properties.city {
        Some(city) => format!("{}, {}", properties.district, city),
        None => properties.district.clone(),
    };

    Popup {
        title: properties.project_name.clone(),
        subtitle,
        status: properties.status_label().to_string(),
        contractor: properties.contractor_label().to_string(),
        detail: DetailAction {
            project_id: properties.project_id,
        },
    }
}
