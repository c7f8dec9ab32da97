use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, Router};
use clap::{Parser, Subcommand};
use http::Method;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{method_not_allowed, not_found},
    middleware::{catch_panic_layer, setup_panic_hook},
    models::verdict::{FieldKind, Verdict},
    routes::{api_routes, check_routes},
    services::validation::validate,
    utils::{init_logger, load_config},
    AppConfig, AppState,
};

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "formcheck")]
#[command(author, version, about = "Email, phone number and website URL validation service.")]
pub struct CliArgs {
    /// Server bind address (overrides config file)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Server port (overrides config file)
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Environment (development, staging, production)
    #[arg(short = 'E', long, default_value = "development")]
    pub env: String,

    /// Configuration file path
    #[arg(short = 'C', long, default_value = "config.toml")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check one value, print the verdict and exit (0 when valid, 1 otherwise)
    Check {
        /// Field to check the value as
        #[arg(value_enum)]
        field: FieldKind,

        /// Value to check, used verbatim
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
}

/// Application bootstrap result containing all initialized components
pub struct BootstrapResult {
    pub app: Router,
    pub bind_addr: String,
}

/// Initialize application logger
pub fn init_logging(log_level: &str) {
    init_logger(log_level);
}

/// Setup panic hook for graceful panic handling
pub fn setup_panic_handler() {
    setup_panic_hook();
}

/// Run a one-shot check for the `check` subcommand
pub fn run_check(field: FieldKind, input: &str) -> Verdict {
    validate(field, input)
}

/// Load and merge configuration from file and CLI arguments
pub fn load_app_config(cli_args: &CliArgs) -> Result<AppConfig> {
    let mut app_config = load_config(&cli_args.config, &cli_args.env)
        .context("Failed to load application configuration")?;

    if let Some(host) = &cli_args.host {
        app_config.server.host = host.clone();
    }
    if let Some(port) = cli_args.port {
        app_config.server.port = port;
    }

    Ok(app_config)
}

/// Create shared application state
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState {
        config: Arc::new(config),
    }
}

/// Configure CORS layer
pub fn configure_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Build application router with all middleware
pub fn build_app_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.limits.max_body_bytes);

    Router::new()
        .nest("/api", api_routes().merge(check_routes()))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(configure_cors())
                .layer(CompressionLayer::new())
                .layer(catch_panic_layer())
                .layer(body_limit),
        )
        .with_state(state)
}

/// Bootstrap the entire application
pub async fn bootstrap(cli_args: CliArgs) -> Result<BootstrapResult> {
    tracing::info!("Starting formcheck in {} mode", cli_args.env);

    let app_config = load_app_config(&cli_args)?;
    let bind_addr = format!("{}:{}", app_config.server.host, app_config.server.port);

    let state = create_app_state(app_config);
    let app = build_app_router(state);

    Ok(BootstrapResult { app, bind_addr })
}

/// Start HTTP server with graceful shutdown
pub async fn start_server(bootstrap_result: BootstrapResult) -> Result<()> {
    let BootstrapResult { app, bind_addr } = bootstrap_result;

    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", bind_addr))?;

    tracing::info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("Server shutdown completed");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C signal, initiating graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received SIGTERM signal, initiating graceful shutdown");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
