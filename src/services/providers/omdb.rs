//! OMDb API provider
//!
//! Looks movies up by exact title (`GET /?t={title}&apikey={key}`). OMDb returns
//! HTTP 200 for unknown titles with `"Response": "False"`, which maps to `Ok(None)`.

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{MovieDetails, OmdbResponse},
    services::providers::MetadataProvider,
};

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn fetch_details(&self, title: &str) -> AppResult<Option<MovieDetails>> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Movie title cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let payload: OmdbResponse = response.json().await?;

        if let OmdbResponse::NotFound { error } = &payload {
            tracing::info!(
                title = %title,
                reason = error.as_deref().unwrap_or("unknown"),
                provider = self.name(),
                "Title not found"
            );
        }

        let details = payload.into_details();

        tracing::debug!(
            title = %title,
            found = details.is_some(),
            provider = self.name(),
            "Metadata fetched"
        );

        Ok(details)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
