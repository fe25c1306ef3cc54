//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! Layer order, outermost first:
//!
//! ```text
//! stamp_req → TraceLayer → log_requests → [set_action_headers] → handler
//! ```
//!
//! `set_action_headers` only wraps the action routes and the manifest.

// region: --- Imports
use crate::handlers::{actions, health, manifest, tokens};
use crate::middleware::{log_requests, set_action_headers, stamp_req, ActionHeaders, RequestStamp};
use crate::routes::{DYNAMIC_SWAP_ACTION, MANIFEST_PATH, SWAP_ACTION};
use crate::services::SwapActionService;
use axum::extract::FromRef;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use lib_core::{Config, ACTION_VERSION};
use lib_solana::{JupiterClient, SwapAggregator, TokenRegistry};
use std::sync::Arc;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<TokenRegistry>,
    pub swap_actions: Arc<SwapActionService>,
}

impl AppState {
    pub fn new(config: Config, registry: Arc<TokenRegistry>, aggregator: Arc<dyn SwapAggregator>) -> Self {
        let swap_actions = Arc::new(SwapActionService::new(
            registry.clone(),
            aggregator,
            config.fallback_icon_url.clone(),
        ));

        Self {
            config,
            registry,
            swap_actions,
        }
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<TokenRegistry> {
    fn from_ref(state: &AppState) -> Self {
        state.registry.clone()
    }
}

impl FromRef<AppState> for Arc<SwapActionService> {
    fn from_ref(state: &AppState) -> Self {
        state.swap_actions.clone()
    }
}
// endregion: --- AppState

// region: --- Server Setup
/// Configure the global tracing subscriber from `LOG_LEVEL` (default `info`).
pub fn init_tracing() -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => tracing_subscriber::EnvFilter::new(&log_level),
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))?;

    info!("Log level: {}", log_level);
    Ok(())
}

/// Initialize and start the HTTP server.
///
/// Loads `.env`, reads and validates [`Config`], builds the Jupiter client and
/// serves until the process is stopped.
///
/// # Errors
///
/// - Invalid configuration (bad slippage, fee account, network or bind address)
/// - Server binding fails
pub async fn start_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    info!("SWAP ACTIONS SERVER STARTING");

    info!("Loading configuration...");
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let registry = Arc::new(TokenRegistry::curated());
    info!("Token registry loaded ({} tokens)", registry.list_all().len());

    let jupiter = JupiterClient::builder()
        .api_base(config.jupiter_api_base.clone())
        .default_slippage_bps(config.default_slippage_bps)
        .fee_account(config.fee_account.clone())
        .registry(registry.clone())
        .build()?;

    let bind_address = config.bind_address.clone();
    let state = AppState::new(config, registry, Arc::new(jupiter));
    let network = state.config.network;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("SERVER READY: http://{} (network: {}, actions v{})", bind_address, network, ACTION_VERSION);
    log_server_info();

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the full router for `state`.
pub fn create_router(state: AppState) -> Router {
    let action_headers = ActionHeaders::new(state.config.network);

    let action_routes: Router<AppState> = Router::new()
        .route(
            SWAP_ACTION.path,
            get(actions::get_swap)
                .post(actions::post_swap)
                .options(actions::preflight),
        )
        .route(
            DYNAMIC_SWAP_ACTION.path,
            get(actions::get_dynamic_swap)
                .post(actions::post_dynamic_swap)
                .options(actions::preflight),
        )
        .route(
            MANIFEST_PATH,
            get(manifest::get_actions_manifest).options(actions::preflight),
        )
        // Subpaths the manifest maps with `/**` behave like the route itself
        .route(
            &format!("{}/{{*rest}}", SWAP_ACTION.path),
            get(actions::get_swap)
                .post(actions::post_swap)
                .options(actions::preflight),
        )
        .route(
            &format!("{}/{{*rest}}", DYNAMIC_SWAP_ACTION.path),
            get(actions::get_dynamic_swap)
                .post(actions::post_dynamic_swap)
                .options(actions::preflight),
        )
        .layer(axum::middleware::from_fn_with_state(action_headers, set_action_headers));

    Router::new()
        .merge(action_routes)
        .route("/api/tokens", get(tokens::search_tokens))
        .route("/health", get(health::health))
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
        .with_state(state)
        // Comprehensive request/response logging
        .layer(axum::middleware::from_fn(log_requests))
        // Tower HTTP trace layer for spans
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::error!(
                            error = ?error,
                            latency_ms = latency.as_millis(),
                            "[HTTP FAILURE] {:?} after {}ms",
                            error,
                            latency.as_millis()
                        );
                    },
                ),
        )
        // Request stamping (adds request ID); added last so it runs first
        .layer(axum::middleware::from_fn(stamp_req))
}

/// Log server information
fn log_server_info() {
    info!(" SOLANA ACTIONS:");
    info!("   • GET|POST|OPTIONS {}?inputMint={{mint}}&outputMint={{mint}}", SWAP_ACTION.path);
    info!("   • GET|POST|OPTIONS {}?inputMint={{mint}}&outputMint={{mint}}", DYNAMIC_SWAP_ACTION.path);
    info!("   • GET {}", MANIFEST_PATH);
    info!(" TOKENS:");
    info!("   • GET  /api/tokens?q={{query}}");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
