// Layout domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Identifiers of widgets that have not been saved yet start with this prefix.
pub const PLACEHOLDER_PREFIX: &str = "index";

const STORAGE_KEY_PREFIX: &str = "grid-layout";

/// Namespaces a layout by organization and dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DashboardKey {
    pub organization_id: String,
    pub dashboard_id: String,
}

impl DashboardKey {
    pub fn new(organization_id: impl Into<String>, dashboard_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            dashboard_id: dashboard_id.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.organization_id.is_empty() && !self.dashboard_id.is_empty()
    }

    /// Key under which the layout is persisted, e.g. `grid-layout-acme-12`.
    pub fn storage_key(&self) -> String {
        format!(
            "{}-{}-{}",
            STORAGE_KEY_PREFIX, self.organization_id, self.dashboard_id
        )
    }
}

/// Placement of one widget on the dashboard grid.
///
/// Only `i` is interpreted here. Coordinates keep the exact JSON number the
/// grid renderer wrote, and any other field is carried along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub i: String,
    pub x: Number,
    pub y: Number,
    pub w: Number,
    pub h: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutEntry {
    #[cfg(test)]
    pub fn new(
        i: impl Into<String>,
        x: impl Into<Number>,
        y: impl Into<Number>,
        w: impl Into<Number>,
        h: impl Into<Number>,
    ) -> Self {
        Self {
            i: i.into(),
            x: x.into(),
            y: y.into(),
            w: w.into(),
            h: h.into(),
            extra: Map::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.i.starts_with(PLACEHOLDER_PREFIX)
    }
}

pub type Layout = Vec<LayoutEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key() {
        let key = DashboardKey::new("acme", "12");
        assert_eq!(key.storage_key(), "grid-layout-acme-12");
    }

    #[test]
    fn test_key_validity() {
        assert!(DashboardKey::new("acme", "12").is_valid());
        assert!(!DashboardKey::new("", "12").is_valid());
        assert!(!DashboardKey::new("acme", "").is_valid());
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(LayoutEntry::new("index-0", 0, 0, 2, 2).is_placeholder());
        assert!(!LayoutEntry::new("widget-42", 0, 0, 2, 2).is_placeholder());
        assert!(!LayoutEntry::new("42-index-0", 0, 0, 2, 2).is_placeholder());
    }

    #[test]
    fn test_unknown_fields_survive_serialization() {
        let raw = r#"[{"i":"7","x":1,"y":2,"w":3,"h":4,"minH":2,"moved":false}]"#;
        let layout: Layout = serde_json::from_str(raw).unwrap();

        assert_eq!(layout[0].i, "7");
        assert_eq!(layout[0].extra.get("minH"), Some(&Value::from(2)));

        let back: Value = serde_json::from_str(&serde_json::to_string(&layout).unwrap()).unwrap();
        let expected: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(back, expected);
    }

    #[test]
    fn test_fractional_coordinates_are_kept() {
        let raw = r#"[{"i":"a","x":0,"y":0,"w":2,"h":2},{"i":"b","x":0.5,"y":1,"w":1.25,"h":2}]"#;
        let layout: Layout = serde_json::from_str(raw).unwrap();

        assert_eq!(layout.len(), 2);
        assert_eq!(layout[1].x.as_f64(), Some(0.5));
        assert_eq!(layout[1].w.as_f64(), Some(1.25));

        let back: Value = serde_json::from_str(&serde_json::to_string(&layout).unwrap()).unwrap();
        let expected: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(back, expected);
    }

    #[test]
    fn test_non_numeric_coordinate_is_rejected() {
        let raw = r#"[{"i":"a","x":"left","y":0,"w":2,"h":2}]"#;
        assert!(serde_json::from_str::<Layout>(raw).is_err());
    }
}
