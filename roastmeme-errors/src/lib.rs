mod app_error;

pub use app_error::{AppError, ErrorBody, ProviderError, GENERIC_FAILURE_MESSAGE};
