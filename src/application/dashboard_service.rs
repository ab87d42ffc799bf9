// Dashboard service - Save widgets upstream, then reconcile the layout
use crate::application::error::LayoutError;
use crate::application::layout_service::LayoutService;
use crate::application::widget_api::WidgetApi;
use crate::domain::layout::{DashboardKey, Layout};
use crate::domain::widget::{Widget, WidgetDraft};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct SavedDashboard {
    pub widgets: Vec<Widget>,
    pub layout: Layout,
}

#[derive(Clone)]
pub struct DashboardService {
    widget_api: Option<Arc<dyn WidgetApi>>,
    layout_service: LayoutService,
}

impl DashboardService {
    pub fn new(widget_api: Option<Arc<dyn WidgetApi>>, layout_service: LayoutService) -> Self {
        Self {
            widget_api,
            layout_service,
        }
    }

    pub async fn save_dashboard(
        &self,
        key: &DashboardKey,
        widgets: Vec<WidgetDraft>,
        layout: Layout,
    ) -> Result<SavedDashboard, LayoutError> {
        if !key.is_valid() {
            return Err(LayoutError::InvalidKey);
        }
        let widget_api = self
            .widget_api
            .as_ref()
            .ok_or(LayoutError::WidgetApiUnavailable)?;

        let submitted = widgets.len();
        let saved = widget_api
            .save_widgets(key, widgets)
            .await
            .map_err(LayoutError::WidgetApi)?;

        if saved.len() != submitted {
            tracing::warn!(
                "Widget API returned {} widgets for {} submitted on {}",
                saved.len(),
                submitted,
                key.storage_key()
            );
        }

        let layout = self
            .layout_service
            .reconcile_and_save(key, &saved, &layout)
            .await?;

        tracing::info!(
            "Saved dashboard {} with {} widgets",
            key.storage_key(),
            saved.len()
        );

        Ok(SavedDashboard {
            widgets: saved,
            layout,
        })
    }
}
