// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::layout_service::LayoutService;

#[derive(Clone)]
pub struct AppState {
    pub layout_service: LayoutService,
    pub dashboard_service: DashboardService,
}
