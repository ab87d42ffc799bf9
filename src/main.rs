// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::layout_service::LayoutService;
use crate::application::layout_storage::LayoutStorage;
use crate::application::widget_api::WidgetApi;
use crate::infrastructure::config::{load_config, StorageBackend};
use crate::infrastructure::file_storage::FileStorage;
use crate::infrastructure::http_widget_api::HttpWidgetApi;
use crate::infrastructure::memory_storage::MemoryStorage;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_layout, health_check, put_layout, reconcile_layout, save_dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config()?;

    // Storage (infrastructure layer)
    let storage: Arc<dyn LayoutStorage> = match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory layout storage; layouts are lost on restart");
            Arc::new(MemoryStorage::new())
        }
        StorageBackend::File => {
            let storage = FileStorage::new(config.storage.directory.clone());
            tracing::info!("Storing layouts in {}", storage.directory().display());
            Arc::new(storage)
        }
    };

    let widget_api: Option<Arc<dyn WidgetApi>> = match config.widget_api {
        Some(api) => {
            tracing::info!("Saving widgets through {}", api.host);
            Some(Arc::new(HttpWidgetApi::new(api.host, api.token)))
        }
        None => {
            tracing::info!("No widget API configured; dashboard saves are disabled");
            None
        }
    };

    // Services (application layer)
    let layout_service = LayoutService::new(storage);
    let dashboard_service = DashboardService::new(widget_api, layout_service.clone());

    let state = Arc::new(AppState {
        layout_service,
        dashboard_service,
    });

    // Router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route(
            "/organizations/:organization_id/dashboards/:dashboard_id/layout",
            get(get_layout).put(put_layout),
        )
        .route(
            "/organizations/:organization_id/dashboards/:dashboard_id/layout/reconcile",
            post(reconcile_layout),
        )
        .route(
            "/organizations/:organization_id/dashboards/:dashboard_id/save",
            post(save_dashboard),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting dashboard-layouts service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
