//! HTTP transport implementation.
//!
//! Serves the front-end page and the single generation endpoint:
//!
//! - `GET /` - `index.html` from the static directory
//! - `GET /static/*` - front-end assets
//! - `POST /api/generate` - run a tool (multipart or url-encoded form)
//! - `GET /api/tools` - tool catalogue
//! - `GET /health` - liveness probe

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Form, FromRequest, Multipart, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::collections::HashMap;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::ToolServer;
use crate::domains::gateway::ImageAttachment;
use crate::domains::prompts::render_html;
use crate::domains::tools::{FailureKind, ToolError, ToolReply, ToolRequest};

const DEFAULT_IMAGE_TYPE: &str = "application/octet-stream";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: ToolServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Run the HTTP transport until Ctrl+C, SIGTERM or a listener failure.
    pub async fn run(self, server: ToolServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", self.config.description());
        info!("  → Generate: POST /api/generate");
        info!("  → Tools:    GET /api/tools");
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(TransportError::Serve)?;

        Ok(())
    }
}

/// Build the application router.
pub fn router(server: ToolServer, config: &HttpConfig) -> Router {
    let mut app = Router::new()
        .route("/api/generate", post(handle_generate))
        .route("/api/tools", get(list_tools))
        .route("/health", get(health_check))
        .route_service("/", ServeFile::new(config.static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { server });

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

// ============================================================================
// Request / response types
// ============================================================================

/// Raw fields of a generate request.
#[derive(Debug, Default)]
pub struct GenerateForm {
    pub tool: Option<String>,
    pub prompt_data: Option<String>,
    pub image: Option<ImageAttachment>,
}

impl GenerateForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(ApiError::form)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("tool") => form.tool = Some(field.text().await.map_err(ApiError::form)?),
                Some("prompt_data") => {
                    form.prompt_data = Some(field.text().await.map_err(ApiError::form)?)
                }
                Some("image") => {
                    let mime_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_IMAGE_TYPE)
                        .to_string();
                    let data = field.bytes().await.map_err(ApiError::form)?;
                    // Browsers send an empty part when no file was chosen.
                    if !data.is_empty() {
                        form.image = Some(ImageAttachment::new(mime_type, data));
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

impl<S> FromRequest<S> for GenerateForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::unreadable(e.status(), e.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        let Form(mut fields) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|e| ApiError::unreadable(e.status(), e.body_text()))?;

        Ok(Self {
            tool: fields.remove("tool"),
            prompt_data: fields.remove("prompt_data"),
            image: None,
        })
    }
}

/// Body of a 200 response.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// Rendered HTML fragment: the answer, or the error text.
    pub result: String,

    /// `ok` or `error`.
    pub outcome: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
}

impl From<ToolReply> for GenerateResult {
    fn from(reply: ToolReply) -> Self {
        Self {
            result: render_html(reply.text()),
            outcome: if reply.is_answer() { "ok" } else { "error" },
            kind: reply.kind(),
        }
    }
}

/// Request rejections, rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// The body was not a readable form.
    Form { status: StatusCode, detail: String },

    /// The form was read but the request is invalid.
    Tool(ToolError),
}

impl ApiError {
    /// Oversized bodies keep their 413; every other read failure is a 400.
    fn unreadable(status: StatusCode, detail: String) -> Self {
        let status = match status {
            StatusCode::PAYLOAD_TOO_LARGE => status,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::Form { status, detail }
    }

    fn form(e: axum::extract::multipart::MultipartError) -> Self {
        Self::unreadable(e.status(), e.body_text())
    }
}

impl From<ToolError> for ApiError {
    fn from(e: ToolError) -> Self {
        Self::Tool(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Form { status, detail } => {
                warn!("Unreadable form: {}", detail);
                (status, "Invalid form data.".to_string())
            }
            Self::Tool(e) => {
                warn!("Rejected request: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Run a tool.
#[instrument(skip_all, fields(tool = form.tool.as_deref().unwrap_or_default()))]
async fn handle_generate(
    State(state): State<AppState>,
    form: GenerateForm,
) -> Result<Json<GenerateResult>, ApiError> {
    let request = ToolRequest::parse(
        form.tool.as_deref(),
        form.prompt_data.as_deref(),
        form.image,
    )?;

    let reply = state.server.generate(request).await?;

    Ok(Json(GenerateResult::from(reply)))
}

/// Tool catalogue.
async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "tools": state.server.list_tools()
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "name": state.server.name(),
        "version": state.server.version(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
