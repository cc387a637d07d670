use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use roastmeme_app::AppContext;
use roastmeme_errors::AppError;
use serde::{Deserialize, Serialize};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const MEME_PATH: &str = "/api/meme";

#[derive(Debug, Default, Deserialize)]
pub struct MemeRequest {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemeResponse {
    pub meme_url: String,
}

pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .route(MEME_PATH, post(generate_meme).options(preflight))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(CompressionLayer::new())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
        .with_state(ctx)
}

async fn generate_meme(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> Result<Json<MemeResponse>, AppError> {
    // Parsed regardless of Content-Type; unreadable bodies count as a missing message.
    let request = serde_json::from_slice::<MemeRequest>(&body).unwrap_or_else(|e| {
        tracing::warn!("Rejected meme request body: {}", e);
        MemeRequest::default()
    });

    let meme = ctx.generate_meme.execute(request.error.as_deref()).await?;

    Ok(Json(MemeResponse {
        meme_url: meme.url,
    }))
}

async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Renders a panic inside the request path as the generic 500 body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Request handler panicked: {}", detail);
    AppError::Internal(detail.to_string()).into_response()
}
