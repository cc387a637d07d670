use super::config::{Credentials, ImgflipConfig};
use super::types::{CaptionRequest, CaptionResponse, GetMemesResponse};
use crate::domain::TemplateCatalog;
use roastmeme_errors::{AppError, ProviderError};
use url::Url;

const GET_MEMES_PATH: &str = "get_memes";
const CAPTION_IMAGE_PATH: &str = "caption_image";

pub struct ImgflipClient {
    http_client: reqwest::Client,
    config: ImgflipConfig,
}

impl ImgflipClient {
    pub fn new(config: ImgflipConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn credentials(&self) -> Result<&Credentials, ProviderError> {
        self.config
            .credentials
            .as_ref()
            .ok_or(ProviderError::MissingCredentials)
    }

    pub async fn get_memes(&self) -> Result<TemplateCatalog, ProviderError> {
        let url = self.endpoint(GET_MEMES_PATH, ProviderError::CatalogFetch)?;

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error("catalog fetch", e, ProviderError::CatalogFetch))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Imgflip get_memes error: {}", status);
            return Err(ProviderError::CatalogFetch(format!("API error: {}", status)));
        }

        let listing: GetMemesResponse = response
            .json()
            .await
            .map_err(|e| transport_error("catalog fetch", e, ProviderError::CatalogFetch))?;

        if !listing.success {
            tracing::error!(
                "Imgflip get_memes reported failure: {}",
                listing.error_message.as_deref().unwrap_or("no message")
            );
            return Err(ProviderError::CatalogFetch(
                "provider reported failure".to_string(),
            ));
        }

        let memes = listing.data.map(|d| d.memes).unwrap_or_default();
        TemplateCatalog::new(memes)
    }

    pub async fn caption_image(
        &self,
        request: &CaptionRequest<'_>,
    ) -> Result<CaptionResponse, ProviderError> {
        let url = self.endpoint(CAPTION_IMAGE_PATH, ProviderError::CaptionRequest)?;

        let response = self
            .http_client
            .post(url)
            .form(request)
            .send()
            .await
            .map_err(|e| transport_error("caption request", e, ProviderError::CaptionRequest))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Imgflip caption_image error: {} - {}", status, body);
            return Err(ProviderError::CaptionRequest(format!("API error: {}", status)));
        }

        response
            .json()
            .await
            .map_err(|e| transport_error("caption request", e, ProviderError::CaptionRequest))
    }

    fn endpoint(
        &self,
        path: &str,
        on_error: fn(String) -> ProviderError,
    ) -> Result<Url, ProviderError> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| on_error(e.to_string()))
    }
}

fn transport_error(
    stage: &'static str,
    err: reqwest::Error,
    on_error: fn(String) -> ProviderError,
) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(stage)
    } else {
        on_error(err.to_string())
    }
}
