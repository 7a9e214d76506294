//! HTTP server exposing the answering function.
//!
//! Every method except `OPTIONS` invokes the function. `OPTIONS` requests
//! are answered by the CORS layer with an empty 200.

pub mod handlers;
pub mod splitter;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::any,
    Router,
};
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::adapters::{OpenAiProvider, ReqwestHttpClient};
use crate::config::ServerConfig;
use crate::error::LensResult;
use crate::traits::CompletionProvider;

pub use handlers::FunctionState;
pub use splitter::split_sentences;

/// Path the function is served under, matching hosted function gateways.
pub const FUNCTION_PATH: &str = "/functions/v1/lens-gpt";

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the function router.
pub fn router(provider: Arc<dyn CompletionProvider>) -> Router {
    Router::new()
        .route(FUNCTION_PATH, any(handlers::invoke_handler))
        .route("/", any(handlers::invoke_handler))
        .layer(cors_layer())
        .with_state(FunctionState::new(provider))
}

/// Start the function server on `addr`.
///
/// Returns the server task and the bound address, which differs from `addr`
/// when port 0 was requested.
pub async fn start_server_on(
    addr: SocketAddr,
    provider: Arc<dyn CompletionProvider>,
) -> LensResult<(JoinHandle<()>, SocketAddr)> {
    let app = router(provider);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("Function server listening on http://{}{}", actual_addr, FUNCTION_PATH);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Function server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

/// Serve the function with the OpenAI provider until the server stops.
pub async fn serve(config: &ServerConfig) -> LensResult<()> {
    let http = Arc::new(ReqwestHttpClient::new());
    let provider = Arc::new(OpenAiProvider::new(http, config));
    tracing::info!(model = %provider.model(), "using completion provider");

    let (handle, _) = start_server_on(config.bind, provider).await?;
    if let Err(e) = handle.await {
        tracing::error!("Function server task failed: {}", e);
    }
    Ok(())
}
