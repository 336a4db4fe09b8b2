//! Emojic HTTP API
//!
//! Endpoints:
//! - GET  /               - Liveness banner
//! - GET  /api/health     - Health check
//! - POST /api/compile    - Emojic -> C
//! - POST /api/analyze    - List mappable C tokens
//! - POST /api/transform  - C -> Emojic with a token -> glyph mapping

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use emojic::{
    AnalyzeRequest, AnalyzeResponse, CompileRequest, CompileResponse, CompilerConfig,
    EmojicError, TransformRequest, TransformResponse,
};

const BANNER: &str = "Emojic Compiler API is Running!";

// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: CompilerConfig,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Core error mapped onto an HTTP response
struct ApiError(EmojicError);

impl From<EmojicError> for ApiError {
    fn from(error: EmojicError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            warn!("Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "emojic=info,emojic_web_server=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = CompilerConfig::from_env()?;
    let app = create_router(AppState { config });

    // Determine address
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or(5000);

    let addr = format!("{}:{}", host, port);
    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        // API routes
        .route("/api/health", get(health_check))
        .route("/api/compile", post(compile_emojic))
        .route("/api/analyze", post(analyze_code))
        .route("/api/transform", post(transform_to_emojic))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn home() -> &'static str {
    BANNER
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/compile
async fn compile_emojic(
    State(state): State<AppState>,
    Json(request): Json<CompileRequest>,
) -> Result<Json<CompileResponse>, ApiError> {
    Ok(Json(emojic::compile(&request, &state.config)?))
}

/// POST /api/analyze
async fn analyze_code(Json(request): Json<AnalyzeRequest>) -> Result<Json<AnalyzeResponse>, ApiError> {
    Ok(Json(emojic::analyze(&request)?))
}

/// POST /api/transform
async fn transform_to_emojic(
    State(state): State<AppState>,
    Json(request): Json<TransformRequest>,
) -> Result<Json<TransformResponse>, ApiError> {
    Ok(Json(emojic::transform(&request, &state.config)?))
}
