//! MCP Server implementation
//!
//! HTTP transport: tool and resource endpoints plus the SSE stream.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response, Sse};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{server::CORS_MAX_AGE_SECS, Config, SseConfig};
use crate::error::{HunterMcpError, McpError, Result};
use crate::hunter::client::HunterClient;
use crate::mcp::resources;
use crate::mcp::sse::{self, Shutdown};
use crate::mcp::tools::ToolHandler;
use crate::mcp::types::*;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    tool_handler: Arc<ToolHandler>,
    sse: SseConfig,
    shutdown: Shutdown,
}

impl AppState {
    pub fn new(tool_handler: Arc<ToolHandler>, sse: SseConfig, shutdown: Shutdown) -> Self {
        Self {
            tool_handler,
            sse,
            shutdown,
        }
    }

    /// Build the state for `config`, with a client against its base URL
    pub fn from_config(config: &Config, shutdown: Shutdown) -> Self {
        let client = HunterClient::with_base_url(config.api_key.clone(), &config.api_base_url);
        let tool_handler = Arc::new(ToolHandler::new(Arc::new(client)));
        Self::new(tool_handler, config.sse, shutdown)
    }
}

impl IntoResponse for HunterMcpError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the router with CORS and request tracing
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECS));

    Router::new()
        .route("/", get(handle_root))
        .route("/tools/list", get(handle_list_tools))
        .route("/tools/call", post(handle_call_tool))
        .route("/resources/list", get(handle_list_resources))
        .route("/resources/read", get(handle_read_resource))
        .route("/sse", get(handle_sse))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Bind `host:port`, falling back once to `host:port+1`
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    match TcpListener::bind((host, port)).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let alternate = port.checked_add(1).ok_or(e)?;
            warn!("Could not bind port {}: trying alternate port {}", port, alternate);
            Ok(TcpListener::bind((host, alternate)).await?)
        }
    }
}

/// Serve until `shutdown` is triggered
pub async fn serve(config: Config, shutdown: Shutdown) -> Result<()> {
    let listener = bind(&config.host, config.port).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("Hunter MCP server listening on http://{}", addr);

    let app = router(AppState::from_config(&config, shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.wait().await;
            info!(sessions = shutdown.open_sessions(), "Shutting down");
        })
        .await?;

    info!("Hunter MCP server stopped");
    Ok(())
}

// ==================== Handlers ====================

async fn handle_root() -> Json<RootInfo> {
    Json(RootInfo::default())
}

async fn handle_list_tools(State(state): State<AppState>) -> Json<ListToolsResult> {
    info!("Tools list requested");
    Json(ListToolsResult {
        tools: state.tool_handler.list_tools().to_vec(),
    })
}

async fn handle_call_tool(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CallToolResult>> {
    let params: CallToolParams = serde_json::from_slice(&body).map_err(|e| {
        HunterMcpError::Mcp(McpError::InvalidRequest {
            message: e.to_string(),
        })
    })?;

    let name = params.name.clone();
    let arguments = params.arguments_or_empty();
    info!(tool = %name, "Tool call");
    tracing::debug!(tool = %name, arguments = %arguments, "Tool call arguments");

    match state.tool_handler.call_tool(&name, arguments).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            warn!(tool = %name, "Error executing tool: {}", e);
            Err(e)
        }
    }
}

async fn handle_list_resources() -> Json<ListResourcesResult> {
    Json(ListResourcesResult {
        resources: resources::list_resources(),
    })
}

async fn handle_read_resource(
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ResourceContents>> {
    let params = match query {
        Ok(Query(pairs)) => ReadResourceParams::from_pairs(&pairs),
        Err(rejection) => {
            warn!("Unreadable resource query: {}", rejection);
            ReadResourceParams::default()
        }
    };
    Ok(Json(resources::read_resource(&params.uri)?))
}

async fn handle_sse(State(state): State<AppState>) -> impl IntoResponse {
    info!("SSE connection requested");

    let stream = sse::sse_stream(state.sse, state.shutdown.subscribe());

    (
        [
            (header::CACHE_CONTROL, HeaderValue::from_static("no-cache, no-transform")),
            (header::CONNECTION, HeaderValue::from_static("keep-alive")),
            (
                header::HeaderName::from_static("x-accel-buffering"),
                HeaderValue::from_static("no"),
            ),
        ],
        Sse::new(stream),
    )
}
