use super::classify_error::classify;
use super::compose_meme::MemeComposer;
use crate::domain::{ErrorReport, MemeResult};
use crate::infrastructure::imgflip::ImgflipClient;
use crate::infrastructure::random::RandomSource;
use roastmeme_errors::AppError;
use std::sync::Arc;

pub struct GenerateMeme {
    composer: MemeComposer,
    rng: Arc<dyn RandomSource>,
}

impl GenerateMeme {
    pub fn new(client: ImgflipClient, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            composer: MemeComposer::new(client, Arc::clone(&rng)),
            rng,
        }
    }

    /// Validates the report, roasts it, and captions a meme with the roast.
    pub async fn execute(&self, raw_error: Option<&str>) -> Result<MemeResult, AppError> {
        let report = ErrorReport::parse(raw_error)?;

        let caption = classify(report.as_str(), &*self.rng);
        tracing::debug!("Classified error report as {:?}", caption.kind());

        let meme = self.composer.compose(&caption).await.map_err(|e| {
            tracing::error!("Meme generation failed: {}", e);
            AppError::from(e)
        })?;

        tracing::info!("Generated meme with template {}", meme.template_name);
        Ok(meme)
    }
}
