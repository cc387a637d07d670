mod client;
mod config;
mod types;

pub use client::ImgflipClient;
pub use config::{Credentials, ImgflipConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use types::{CaptionRequest, CaptionResponse, GetMemesResponse};
