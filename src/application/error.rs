// Errors raised by the layout use cases
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("organization and dashboard ids must not be empty")]
    InvalidKey,

    #[error("layout storage failed: {0:#}")]
    Storage(anyhow::Error),

    #[error("failed to serialize layout: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("widget API request failed: {0:#}")]
    WidgetApi(anyhow::Error),

    #[error("no widget API configured")]
    WidgetApiUnavailable,
}
