// Widget API trait for saving dashboard widgets upstream
use crate::domain::layout::DashboardKey;
use crate::domain::widget::{Widget, WidgetDraft};
use async_trait::async_trait;

#[async_trait]
pub trait WidgetApi: Send + Sync {
    /// Save the dashboard's widgets and return them with durable ids.
    /// Implementations must return widgets in the order they were submitted.
    async fn save_widgets(
        &self,
        key: &DashboardKey,
        widgets: Vec<WidgetDraft>,
    ) -> anyhow::Result<Vec<Widget>>;
}
