// HTTP request handlers
use crate::application::dashboard_service::SavedDashboard;
use crate::application::error::LayoutError;
use crate::domain::layout::{DashboardKey, Layout};
use crate::domain::widget::{Widget, WidgetDraft};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct DashboardPath {
    pub organization_id: String,
    pub dashboard_id: String,
}

impl From<DashboardPath> for DashboardKey {
    fn from(path: DashboardPath) -> Self {
        DashboardKey::new(path.organization_id, path.dashboard_id)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileRequest {
    pub saved_widgets: Vec<Widget>,
    pub layout: Layout,
}

#[derive(Deserialize)]
pub struct SaveDashboardRequest {
    pub widgets: Vec<WidgetDraft>,
    #[serde(default)]
    pub layout: Layout,
}

impl IntoResponse for LayoutError {
    fn into_response(self) -> Response {
        let status = match &self {
            LayoutError::InvalidKey => StatusCode::BAD_REQUEST,
            LayoutError::Storage(_) | LayoutError::Serialize(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            LayoutError::WidgetApi(_) => StatusCode::BAD_GATEWAY,
            LayoutError::WidgetApiUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        };
        tracing::error!("Request failed: {}", self);
        (status, self.to_string()).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Saved layout for a dashboard; an empty array when none is stored
pub async fn get_layout(
    Path(path): Path<DashboardPath>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let layout = state.layout_service.load_layout(&path.into()).await;

    match json_response(&layout, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

pub async fn put_layout(
    Path(path): Path<DashboardPath>,
    State(state): State<Arc<AppState>>,
    Json(layout): Json<Layout>,
) -> Result<StatusCode, LayoutError> {
    state.layout_service.save_layout(&path.into(), &layout).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Relabel placeholder ids against widgets the client already saved
pub async fn reconcile_layout(
    Path(path): Path<DashboardPath>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReconcileRequest>,
) -> Result<Json<Layout>, LayoutError> {
    let layout = state
        .layout_service
        .reconcile_and_save(&path.into(), &request.saved_widgets, &request.layout)
        .await?;
    Ok(Json(layout))
}

/// Save widgets through the dashboards API, then reconcile and store the layout
pub async fn save_dashboard(
    Path(path): Path<DashboardPath>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveDashboardRequest>,
) -> Result<Json<SavedDashboard>, LayoutError> {
    let saved = state
        .dashboard_service
        .save_dashboard(&path.into(), request.widgets, request.layout)
        .await?;
    Ok(Json(saved))
}
