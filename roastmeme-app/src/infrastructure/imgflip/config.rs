use roastmeme_errors::AppError;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.imgflip.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Both values must be present and non-blank.
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        let username = username.filter(|u| !u.trim().is_empty())?;
        let password = password.filter(|p| !p.trim().is_empty())?;
        Some(Self { username, password })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ImgflipConfig {
    pub base_url: Url,
    pub credentials: Option<Credentials>,
    pub timeout: Duration,
}

impl ImgflipConfig {
    pub fn new(mut base_url: Url) -> Self {
        // Url::join replaces the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            base_url,
            credentials: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Credentials::from_parts(Some(username.into()), Some(password.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, AppError> {
        let raw_url =
            std::env::var("IMGFLIP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let base_url = Url::parse(&raw_url)
            .map_err(|e| AppError::Internal(format!("Invalid IMGFLIP_API_URL: {}", e)))?;

        let credentials = Credentials::from_parts(
            std::env::var("IMGFLIP_USERNAME").ok(),
            std::env::var("IMGFLIP_PASSWORD").ok(),
        );
        if credentials.is_none() {
            tracing::warn!(
                "IMGFLIP_USERNAME or IMGFLIP_PASSWORD not set; meme generation will fail until configured"
            );
        }

        let timeout = parse_timeout(std::env::var("IMGFLIP_TIMEOUT_SECS").ok().as_deref());

        Ok(Self {
            credentials,
            timeout,
            ..Self::new(base_url)
        })
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let Some(raw) = raw else {
        return Duration::from_secs(DEFAULT_TIMEOUT_SECS);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            tracing::warn!(
                "Ignoring IMGFLIP_TIMEOUT_SECS={:?}, using {}s",
                raw,
                DEFAULT_TIMEOUT_SECS
            );
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        }
    }
}
