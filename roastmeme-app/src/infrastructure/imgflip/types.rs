use super::config::Credentials;
use crate::domain::MemeTemplate;
use roastmeme_errors::ProviderError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GetMemesResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<GetMemesData>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetMemesData {
    pub memes: Vec<MemeTemplate>,
}

/// Form body for `caption_image`. Not `Debug`: it carries the password.
#[derive(Serialize)]
pub struct CaptionRequest<'a> {
    pub template_id: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub text0: &'a str,
    pub text1: &'a str,
}

impl<'a> CaptionRequest<'a> {
    pub fn new(
        template: &'a MemeTemplate,
        credentials: &'a Credentials,
        top_text: &'a str,
        bottom_text: &'a str,
    ) -> Self {
        Self {
            template_id: &template.id,
            username: &credentials.username,
            password: &credentials.password,
            text0: top_text,
            text1: bottom_text,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CaptionResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<CaptionData>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CaptionData {
    pub url: String,
}

impl CaptionResponse {
    pub fn into_image_url(self) -> Result<String, ProviderError> {
        if !self.success {
            let message = self
                .error_message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Failed to generate meme".to_string());
            return Err(ProviderError::CaptionRejected(message));
        }

        self.data
            .map(|d| d.url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ProviderError::CaptionRejected("response missing image url".to_string()))
    }
}
