//! REST client for the RoadWatch backend.

use gloo_net::http::Request;
use roadwatch_api_models::{CONSTRUCTION_NOTICES_PATH, ConstructionNotice};

/// Thin JSON client bound to one API base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, url: &str) -> anyhow::Result<T> {
        let response = Request::get(url).send().await?;
        if !response.ok() {
            anyhow::bail!("GET {url} failed with status {}", response.status());
        }
        Ok(response.json::<T>().await?)
    }

    /// Fetch every construction notice published by the backend.
    pub(crate) async fn fetch_construction_notices(&self) -> anyhow::Result<Vec<ConstructionNotice>> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            CONSTRUCTION_NOTICES_PATH.trim_start_matches('/')
        );
        self.get_json(&url).await
    }
}
