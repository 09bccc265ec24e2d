//! Showcases web server.
//!
//! Hosts the built dashboard frontend and a small JSON API for the project
//! catalog and the mail delivery hook.

mod routes;
mod state;

use anyhow::Context;
use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::{get, post},
};
use clap::Parser;
use core_types::Unconfigured;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use routes::{list_projects, redirect_trailing_slash, send_mail, spa_fallback};
use state::AppState;

/// showcases-server: dashboard host and API
#[derive(Parser, Debug)]
#[command(name = "showcases-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Directory containing the built frontend
    #[arg(long, env = "DIST_DIR", default_value = "crates/frontend/dist")]
    dist: PathBuf,

    /// Log filter (e.g. "info", "showcases_server=debug")
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

/// Build the application router.
fn app(state: AppState) -> Router {
    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build API routes
    let api_routes = Router::new()
        .route("/projects", get(list_projects))
        .route("/mail", post(send_mail));

    // Static files first, then the client route table
    let pages = ServeDir::new(state.dist())
        .append_index_html_on_directories(true)
        .fallback(spa_fallback.with_state(state.clone()));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(pages)
        .layer(middleware::from_fn(redirect_trailing_slash))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let catalog = core_types::catalog::builtin().clone();
    info!(projects = catalog.len(), "Loaded catalog");
    if !cli.dist.join("index.html").exists() {
        tracing::warn!(dist = %cli.dist.display(), "frontend not built; pages will return 503");
    }

    let state = AppState::new(catalog, Unconfigured, cli.dist);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app(state))
        .await
        .context("server terminated")?;

    Ok(())
}
