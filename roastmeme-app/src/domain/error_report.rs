use roastmeme_errors::AppError;

pub const MISSING_ERROR_MESSAGE: &str = "Error message is required";

/// User-submitted error text, guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport(String);

impl ErrorReport {
    pub fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let text = raw.map(str::trim).unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::InvalidInput(MISSING_ERROR_MESSAGE.to_string()));
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
