//! Web server module for Stroop.
//!
//! Every page request draws a fresh initial state, renders the view on the
//! server and wraps it in a page shell. Interactive pages hand the same state
//! to the browser client for hydration.
//!
//! # Endpoints
//!
//! - `GET /` - Page in the configured default mode
//! - `GET /interactive` - Page with hydration data and the client bundle
//! - `GET /static` - Server markup only
//! - `GET /health` - Health check
//! - `GET /pkg/{*path}` - Embedded client bundle

pub mod page;
pub mod static_files;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{extract::State, http::StatusCode, response::Html, routing::get, Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::{Config, RenderMode};
use crate::constants::APP_NAME;
use crate::names::NameProvider;
use crate::view::{DisplayState, StroopView};
use page::PageShell;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Names initial states are drawn from
    names: NameProvider,
    /// Generator for initial states, locked only for the two draws of a request
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Creates a new application state seeded from OS entropy.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates an application state whose pages are reproducible for a given seed.
    #[must_use]
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            config: Arc::new(config),
            names: NameProvider::default(),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Returns the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Draws the initial state for one page, label and color independently.
    pub fn initial_state(&self) -> DisplayState {
        // A panic mid-draw leaves the generator usable, so poisoning is ignored
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        DisplayState::random_with(&self.names, &mut *rng)
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type PageResult = Result<Html<String>, (StatusCode, Json<ApiError>)>;

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / - Page in the configured default mode.
async fn index(State(state): State<AppState>) -> PageResult {
    render_page(&state, state.config.page.mode)
}

/// GET /interactive - Page that hydrates in the browser.
async fn interactive_page(State(state): State<AppState>) -> PageResult {
    render_page(&state, RenderMode::Interactive)
}

/// GET /static - Page without hydration data or client bundle.
async fn static_page(State(state): State<AppState>) -> PageResult {
    render_page(&state, RenderMode::Static)
}

fn render_page(state: &AppState, mode: RenderMode) -> PageResult {
    let initial = state.initial_state();
    debug!(
        label = %initial.label,
        color = %initial.color,
        ?mode,
        "Rendering page"
    );

    let view = StroopView::new(initial.into());
    PageShell::from_config(&state.config, mode)
        .render(&view)
        .map(Html)
        .map_err(|e| {
            error!("Failed to render page: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details("Failed to render page", e.to_string())),
            )
        })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The client bundle may be loaded from a separate dev server during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/interactive", get(interactive_page))
        .route("/static", get(static_page))
        .route("/health", get(health_check))
        .route("/pkg/{*path}", get(static_files::serve_bundle))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Warns when interactive pages would point at an embedded bundle that is missing.
fn check_client_bundle(config: &Config) {
    if !config.page.mode.is_interactive() {
        return;
    }

    if let Some(asset) = config.client.bundle_url.strip_prefix("/pkg/") {
        if !static_files::has_asset(asset) {
            warn!(
                "Client bundle '{}' is not embedded; pages will render but not hydrate. \
                 Build it with: wasm-pack build --target web --out-dir web/pkg \
                 --no-default-features --features hydrate",
                config.client.bundle_url
            );
        }
    }
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `seed` - Optional seed making initial states reproducible
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, seed: Option<u64>, addr: SocketAddr) -> anyhow::Result<()> {
    check_client_bundle(&config);

    let state = match seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            AppState::with_seed(config, seed)
        }
        None => AppState::new(config),
    };
    let app = create_router(state);

    info!("Starting {} web server on {}", APP_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_uses_color_names() {
        let state = AppState::new(Config::new());
        for _ in 0..100 {
            let initial = state.initial_state();
            assert!(state.names.contains(&initial.label));
            assert!(state.names.contains(&initial.color));
        }
    }

    #[test]
    fn test_seeded_states_repeat() {
        let a = AppState::with_seed(Config::new(), 42);
        let b = AppState::with_seed(Config::new(), 42);
        for _ in 0..10 {
            assert_eq!(a.initial_state(), b.initial_state());
        }
    }

    #[test]
    fn test_cloned_state_shares_generator() {
        let a = AppState::with_seed(Config::new(), 42);
        let b = a.clone();
        let fresh = AppState::with_seed(Config::new(), 42);

        // Draws from the clone advance the shared generator
        let first = a.initial_state();
        let second = b.initial_state();
        assert_eq!(first, fresh.initial_state());
        assert_eq!(second, fresh.initial_state());
    }
}
