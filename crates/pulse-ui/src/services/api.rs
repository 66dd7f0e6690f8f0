//! HTTP client for the backend health endpoints.

use crate::core::probe::{ProbeError, check_status};
use crate::core::providers::probe_path;
use crate::core::settings::Settings;
use gloo_net::http::{Request, Response};
use pulse_api_models::{HEALTH_GENERAL_PATH, ProviderProbeResponse};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    settings: Settings,
}

impl ApiClient {
    pub(crate) const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    async fn get(&self, path: &str) -> Result<Response, ProbeError> {
        let response = Request::get(&self.settings.api_url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(ProbeError::transport)?;
        check_status(response.status(), &response.status_text())?;
        Ok(response)
    }

    /// Liveness check; the body only has to parse as JSON.
    pub(crate) async fn fetch_health_general(&self) -> Result<(), ProbeError> {
        self.get(HEALTH_GENERAL_PATH)
            .await?
            .json::<serde_json::Value>()
            .await
            .map_err(ProbeError::transport)?;
        Ok(())
    }

    pub(crate) async fn fetch_provider_probe(
        &self,
        force_refresh: bool,
        prompt: &str,
    ) -> Result<ProviderProbeResponse, ProbeError> {
        self.get(&probe_path(force_refresh, prompt))
            .await?
            .json::<ProviderProbeResponse>()
            .await
            .map_err(ProbeError::transport)
    }
}
