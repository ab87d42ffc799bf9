// Dashboards REST API client
use crate::application::widget_api::WidgetApi;
use crate::domain::layout::DashboardKey;
use crate::domain::widget::{Widget, WidgetDraft};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct HttpWidgetApi {
    host: String,
    token: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct SaveDashboardRequest {
    widgets: Vec<WidgetDraft>,
}

#[derive(Debug, Deserialize)]
struct SaveDashboardResponse {
    #[serde(default)]
    widgets: Vec<Widget>,
}

impl HttpWidgetApi {
    pub fn new(host: String, token: String) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    fn dashboard_url(&self, key: &DashboardKey) -> String {
        format!(
            "{}/api/0/organizations/{}/dashboards/{}/",
            self.host,
            urlencoding::encode(&key.organization_id),
            urlencoding::encode(&key.dashboard_id)
        )
    }
}

#[async_trait]
impl WidgetApi for HttpWidgetApi {
    async fn save_widgets(
        &self,
        key: &DashboardKey,
        widgets: Vec<WidgetDraft>,
    ) -> Result<Vec<Widget>> {
        let url = self.dashboard_url(key);
        tracing::debug!("Saving {} widgets to {}", widgets.len(), url);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(&SaveDashboardRequest { widgets })
            .send()
            .await
            .context("Failed to send request to dashboards API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Dashboard save failed with status {}: {}", status, body);
        }

        let data = response
            .json::<SaveDashboardResponse>()
            .await
            .context("Failed to parse dashboards API response")?;

        Ok(data.widgets)
    }
}
