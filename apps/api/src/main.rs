use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use toolkit_api::catalog::{row_store::RowStoreClient, Backgrounds, Catalog};
use toolkit_api::llm_client::GeminiClient;
use toolkit_api::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter(&["toolkit_api"]))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting {} v{}", config.app_name, config.app_version);

    // Initialize the text-generation gateway
    let llm = GeminiClient::new(&config.gemini).context("Failed to build Gemini client")?;
    if config.gemini.api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set; AI features will fall back to local behavior");
    }
    info!("Gemini client initialized (model: {})", config.gemini.model);

    // Initialize the catalog and backgrounds, optionally backed by the row store
    let mut catalog = Catalog::builtin();
    let mut backgrounds = Backgrounds::builtin();
    if let Some(row_store) = &config.row_store {
        let client = Arc::new(RowStoreClient::new(row_store).context("Failed to build row-store client")?);
        catalog = catalog.with_remote(client.clone());
        backgrounds = backgrounds.with_remote(client);
        info!("Row store enabled at {}", row_store.url);
    } else {
        info!("Row store not configured, serving the built-in catalog");
    }

    let state = AppState {
        catalog,
        backgrounds,
        llm: Arc::new(llm),
        config: Arc::new(config.clone()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Allows the configured origins with any method and header. Unparseable
/// origins are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
