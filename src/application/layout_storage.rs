// Storage trait for persisted layouts
use async_trait::async_trait;

/// Key-value store holding serialized layouts.
///
/// A single `set` must be atomic: readers see either the old or the new value.
#[async_trait]
pub trait LayoutStorage: Send + Sync {
    /// Raw value stored under `key`, or `None` if nothing was written
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Overwrite the value under `key`
    async fn set(&self, key: &str, value: String) -> anyhow::Result<()>;
}
