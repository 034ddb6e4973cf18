use serde_json::{Map, Value};

/// Placeholder shown for missing display fields.
pub const MISSING_FIELD: &str = "N/A";

/// Lifecycle status of a road project.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Pending,
    Approved,
    Active,
    Completed,
    Maintenance,
    Delayed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 7] = [
        ProjectStatus::Pending,
        ProjectStatus::Approved,
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::Maintenance,
        ProjectStatus::Delayed,
        ProjectStatus::Cancelled,
    ];

    /// Case-insensitive parse; anything outside the fixed enumeration is
    /// `None`, never an error.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "maintenance" => Some(Self::Maintenance),
            "delayed" => Some(Self::Delayed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Maintenance => "maintenance",
            Self::Delayed => "delayed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Typed view of a road feature's property bag.
///
/// Only `project_id` is load-bearing (it drives navigation); every other
/// field degrades to a placeholder when missing or malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadProperties {
    pub project_id: i64,
    pub project_name: String,
    pub district: String,
    pub city: Option<String>,
    pub status: Option<ProjectStatus>,
    pub contractor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertiesError {
    MissingProjectId,
}

impl std::fmt::Display for PropertiesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertiesError::MissingProjectId => {
                write!(f, "feature properties missing a usable project_id")
            }
        }
    }
}

impl std::error::Error for PropertiesError {}

impl RoadProperties {
    pub fn from_map(props: &Map<String, Value>) -> Result<Self, PropertiesError> {
        let project_id = props
            .get("project_id")
            .and_then(value_as_i64)
            .ok_or(PropertiesError::MissingProjectId)?;

        Ok(Self {
            project_id,
            project_name: string_or_placeholder(props, "project_name"),
            district: string_or_placeholder(props, "district"),
            city: optional_string(props, "city"),
            status: props
                .get("status")
                .and_then(|v| v.as_str())
                .and_then(ProjectStatus::parse),
            contractor: optional_string(props, "contractor"),
        })
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map(|s| s.as_str()).unwrap_or("unknown")
    }

    pub fn contractor_label(&self) -> &str {
        self.contractor.as_deref().unwrap_or(MISSING_FIELD)
    }
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn optional_string(props: &Map<String, Value>, key: &str) -> Option<String> {
    let s = props.get(key)?.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    Some(s.to_string())
}

fn string_or_placeholder(props: &Map<String, Value>, key: &str) -> String {
    optional_string(props, key).unwrap_or_else(|| MISSING_FIELD.to_string())
}
