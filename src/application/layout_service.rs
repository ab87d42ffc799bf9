// Layout service - Use cases for loading, saving and reconciling layouts
use crate::application::error::LayoutError;
use crate::application::layout_storage::LayoutStorage;
use crate::domain::layout::{DashboardKey, Layout};
use crate::domain::reconcile::reconcile_layout;
use crate::domain::widget::Widget;
use std::sync::Arc;

#[derive(Clone)]
pub struct LayoutService {
    storage: Arc<dyn LayoutStorage>,
}

impl LayoutService {
    pub fn new(storage: Arc<dyn LayoutStorage>) -> Self {
        Self { storage }
    }

    /// Load the saved layout for a dashboard.
    ///
    /// Never fails: a missing, unreadable or corrupt layout is an empty one.
    pub async fn load_layout(&self, key: &DashboardKey) -> Layout {
        if !key.is_valid() {
            tracing::debug!("Ignoring layout lookup with empty key {:?}", key);
            return Layout::new();
        }

        let storage_key = key.storage_key();
        let raw = match self.storage.get(&storage_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No saved layout under {}", storage_key);
                return Layout::new();
            }
            Err(e) => {
                tracing::warn!("Error reading layout {}: {:#}", storage_key, e);
                return Layout::new();
            }
        };

        match serde_json::from_str::<Layout>(&raw) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!("Discarding malformed layout {}: {}", storage_key, e);
                Layout::new()
            }
        }
    }

    /// Persist a layout, replacing whatever was stored for the dashboard.
    pub async fn save_layout(
        &self,
        key: &DashboardKey,
        layout: &Layout,
    ) -> Result<(), LayoutError> {
        if !key.is_valid() {
            return Err(LayoutError::InvalidKey);
        }

        let raw = serde_json::to_string(layout)?;
        self.storage
            .set(&key.storage_key(), raw)
            .await
            .map_err(LayoutError::Storage)?;

        tracing::debug!("Saved {} layout entries for {}", layout.len(), key.storage_key());
        Ok(())
    }

    /// Relabel placeholder entries with the saved widgets' ids and persist the result.
    pub async fn reconcile_and_save(
        &self,
        key: &DashboardKey,
        saved_widgets: &[Widget],
        layout: &Layout,
    ) -> Result<Layout, LayoutError> {
        let reconciled = reconcile_layout(saved_widgets, layout);
        self.save_layout(key, &reconciled).await?;
        Ok(reconciled)
    }
}
