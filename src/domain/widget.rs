// Widget domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A widget as returned by the dashboards API after it has been saved.
///
/// Query, display type and title belong to the API; they pass through in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    /// Client correlation id echoed back from the save request, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Widget {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            temp_id: None,
            extra: Map::new(),
        }
    }

    #[cfg(test)]
    pub fn with_temp_id(mut self, temp_id: impl Into<String>) -> Self {
        self.temp_id = Some(temp_id.into());
        self
    }
}

/// Widget definition as submitted by the client; opaque to this service.
pub type WidgetDraft = Map<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_widget() {
        let raw = r#"{"id":"99","tempId":"index-0","title":"Errors","displayType":"line"}"#;
        let widget: Widget = serde_json::from_str(raw).unwrap();

        assert_eq!(widget.id, "99");
        assert_eq!(widget.temp_id.as_deref(), Some("index-0"));
        assert_eq!(widget.extra.get("title"), Some(&Value::from("Errors")));
    }

    #[test]
    fn test_temp_id_is_optional() {
        let widget: Widget = serde_json::from_str(r#"{"id":"5"}"#).unwrap();
        assert_eq!(widget, Widget::new("5"));
    }
}
