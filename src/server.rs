use anyhow::Result;
use arc_swap::ArcSwap;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, request::Parts, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    leads,
    logging::mask_url,
    metrics,
    signals::setup_signal_handlers,
};

/// Request bodies are three numbers and an email; anything bigger is abuse
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Start the ROI calculator server
///
/// This function:
/// 1. Installs the Prometheus recorder (if enabled)
/// 2. Builds the lead sink and shared state
/// 3. Sets up signal handlers for graceful shutdown and config reload
/// 4. Serves requests until a shutdown signal arrives
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let http_client = reqwest::Client::new();
    let sink = leads::build_sink(&config.leads, http_client.clone());
    let app_state = AppState::new(config.clone(), sink);

    // Setup signal handlers (SIGTERM, SIGINT for shutdown; SIGHUP for reload)
    let (shutdown_tx, signal_handle) =
        setup_signal_handlers(app_state.clone(), config_path, http_client);
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(app_state, metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting ROI calculator on {}", addr);
    info!(
        lead_mode = ?config.leads.mode,
        lead_endpoint = %mask_url(&config.leads.endpoint),
        metrics = config.metrics.enabled,
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
///
/// The metrics endpoint is only mounted when a Prometheus handle is given.
pub fn create_router(app_state: AppState, metrics_handle: Option<Arc<PrometheusHandle>>) -> Router {
    let config = app_state.config.load_full();
    let cors = cors_layer(app_state.config.clone());

    let api_routes = Router::new()
        .route("/api/estimate", post(handlers::estimate::handle_estimate))
        .route("/api/leads", post(handlers::leads::handle_lead))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(app_state);

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes);

    if let Some(handle) = metrics_handle {
        router = router.merge(
            Router::new()
                .route(
                    &config.metrics.endpoint,
                    get(handlers::metrics_handler::metrics),
                )
                .with_state(handle),
        );
    }

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS for the embedding page
///
/// Origins are checked against the live configuration, so a SIGHUP reload
/// of `server.cors_origins` applies to the next request.
fn cors_layer(config: Arc<ArcSwap<Config>>) -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin_allowed(&config.load().server.cors_origins, origin)
            },
        ))
}

/// An empty list allows any origin
fn origin_allowed(allowed: &[String], origin: &HeaderValue) -> bool {
    allowed.is_empty()
        || allowed
            .iter()
            .any(|allowed| allowed.as_bytes() == origin.as_bytes())
}
