use crate::application::GenerateMeme;
use crate::infrastructure::imgflip::{ImgflipClient, ImgflipConfig};
use crate::infrastructure::random::{RandomSource, ThreadRandom};
use roastmeme_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub generate_meme: Arc<GenerateMeme>,
}

impl AppContext {
    pub fn new(config: ImgflipConfig, rng: Arc<dyn RandomSource>) -> Result<Self, AppError> {
        let client = ImgflipClient::new(config)?;
        Ok(Self {
            generate_meme: Arc::new(GenerateMeme::new(client, rng)),
        })
    }

    pub fn from_env() -> Result<Self, AppError> {
        let config = ImgflipConfig::from_env()?;
        tracing::info!(
            "Using Imgflip at {} (timeout {}s)",
            config.base_url,
            config.timeout.as_secs()
        );
        Self::new(config, Arc::new(ThreadRandom))
    }
}
