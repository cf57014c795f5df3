//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors render through
//! `kernel::error::AppError` inside the game router.

use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::{
    Router, http,
    http::{Method, header},
};
use highlow::infra::random::SeededTargets;
use highlow::{
    GameConfig, GeminiTextGenerator, InMemoryGameRepository, Locale, ProbeMode, game_router,
    game_router_generic,
};
use platform::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Read and parse an optional setting; bad values fall back with a warning
fn env_setting<T>(name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(setting = name, value = %raw, error = %e, "Ignoring invalid setting");
            None
        }
    }
}

fn game_config() -> GameConfig {
    let locale = env_setting::<Locale>("HIGHLOW_LOCALE").unwrap_or_default();
    let mut config = GameConfig::for_locale(locale);

    if let Some(mode) = env_setting::<ProbeMode>("HIGHLOW_PROBE_MODE") {
        config.probe_mode = mode;
    }
    if let Some(secs) = env_setting::<u64>("HIGHLOW_COMMENTARY_TIMEOUT_SECS") {
        config.commentary_timeout = Duration::from_secs(secs.max(1));
    }

    config
}

fn gemini_client() -> GeminiClient {
    let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    GeminiClient::new(base_url, model)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,highlow=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Game configuration
    let config = game_config();
    let client = gemini_client();
    tracing::info!(
        locale = ?config.locale,
        probe_mode = ?config.probe_mode,
        commentary_timeout_secs = config.commentary_timeout.as_secs(),
        model = %client.model(),
        "Game configured"
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Fixed seed gives a reproducible target sequence
    let generator = GeminiTextGenerator::new(client);
    let game = match env_setting::<u64>("HIGHLOW_TARGET_SEED") {
        Some(seed) => {
            tracing::warn!(seed, "Targets are drawn from a fixed seed");
            game_router_generic(
                InMemoryGameRepository::new(),
                generator,
                SeededTargets::new(seed),
                config,
            )
        }
        None => game_router(generator, config),
    };

    // Build router
    let app = Router::new()
        .nest("/api/game", game)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server (loopback unless configured)
    let addr: SocketAddr = env_setting("HIGHLOW_BIND_ADDR")
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 31113)));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
