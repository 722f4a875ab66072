//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the static-file handler
//! - Wire up middleware (timeout, concurrency limit, tracing)
//! - Serve over the rustls acceptor
//! - Map resolver errors to HTTP status codes

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ContentConfig, ServerConfig};
use crate::http::{mime, resolver};
use crate::net::listener::Listener;

/// How long in-flight requests get to finish after a shutdown signal.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    content: Arc<ContentConfig>,
}

/// HTTPS server for static content.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            content: Arc::new(config.content.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Every path falls through to the static handler; `get` answers GET
    /// and HEAD and rejects other methods with 405.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .fallback(get(serve_file))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(GlobalConcurrencyLimitLayer::new(
                config.listener.max_connections,
            ))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve connections from the listener until the shutdown signal.
    ///
    /// TLS handshake failures are contained by the acceptor; the listener
    /// keeps serving other connections.
    pub async fn run(
        self,
        listener: Listener,
        tls_config: RustlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(url = %format_args!("https://{}/", addr), "Serving");

        let handle = Handle::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            drain.graceful_shutdown(Some(DRAIN_TIMEOUT));
        });

        axum_server::from_tcp_rustls(listener.into_std(), tls_config)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

/// Static file handler.
///
/// Normalizes the request path, resolves it below the document root, and
/// streams back the file bytes with an inferred content type.
async fn serve_file(State(state): State<AppState>, uri: Uri) -> Response {
    let raw_path = uri.path();

    let relative = match resolver::normalize_path(raw_path) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(path = %raw_path, error = %e, "Rejected request path");
            return error_response(&e);
        }
    };

    let resolved = match resolver::resolve(
        &state.content.root,
        &relative,
        &state.content.index_file,
    )
    .await
    {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!(path = %raw_path, error = %e, "Resolution failed");
            return error_response(&e);
        }
    };

    let body = match tokio::fs::read(&resolved).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let e = resolver::classify(e);
            tracing::debug!(file = %resolved.display(), error = %e, "Read failed");
            return error_response(&e);
        }
    };

    let content_type = mime::content_type_for(&resolved, state.content.mime_detection);

    tracing::debug!(
        path = %raw_path,
        file = %resolved.display(),
        bytes = body.len(),
        "Served file"
    );

    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}

/// Status code and minimal body for a failed resolution.
fn status_for(err: &resolver::ResolveError) -> (StatusCode, &'static str) {
    use resolver::ResolveError;

    match err {
        ResolveError::BadRequest => (StatusCode::BAD_REQUEST, "Bad Request"),
        // Traversal attempts look identical to missing files from outside.
        ResolveError::Traversal | ResolveError::NotFound => {
            (StatusCode::NOT_FOUND, "Not Found")
        }
        ResolveError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
        ResolveError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
    }
}

fn error_response(err: &resolver::ResolveError) -> Response {
    status_for(err).into_response()
}
