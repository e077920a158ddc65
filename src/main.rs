use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use pesisir_intake::adapters::auth::CredentialVerifier;
use pesisir_intake::adapters::forecast::{BmkgConfig, BmkgForecastClient};
use pesisir_intake::adapters::http::{
    auth_routes, chat_routes, forecast_routes, ChatHandlers, ForecastHandlers,
};
use pesisir_intake::adapters::notify::TracingNotifier;
use pesisir_intake::adapters::session::InMemorySessionRegistry;
use pesisir_intake::application::handlers::chat::{
    CloseSessionHandler, GetHistoryHandler, OpenSessionHandler, SubmitMessageHandler,
};
use pesisir_intake::application::handlers::forecast::GetForecastOverviewHandler;
use pesisir_intake::config::AppConfig;
use pesisir_intake::ports::{EmergencyNotifier, ForecastClient, SessionRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_logging(&config.server.log_level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting pesisir-intake service"
    );

    // Wire ports to their concrete adapters.
    let registry: Arc<dyn SessionRegistry> = Arc::new(InMemorySessionRegistry::new());
    let notifier: Arc<dyn EmergencyNotifier> = Arc::new(TracingNotifier::new());
    let forecast_client: Arc<dyn ForecastClient> = Arc::new(BmkgForecastClient::new(
        BmkgConfig::new(config.forecast.feed_url.clone())
            .with_timeout(config.forecast.timeout()),
    )?);
    let verifier = Arc::new(CredentialVerifier::new(
        config.auth.email.clone(),
        config.auth.password.clone(),
    ));

    let chat_handlers = ChatHandlers::new(
        Arc::new(OpenSessionHandler::new(
            registry.clone(),
            config.chat.report_number_base,
        )),
        Arc::new(SubmitMessageHandler::new(registry.clone(), notifier)),
        Arc::new(GetHistoryHandler::new(registry.clone())),
        Arc::new(CloseSessionHandler::new(registry)),
    );
    let forecast_handlers =
        ForecastHandlers::new(Arc::new(GetForecastOverviewHandler::new(forecast_client)));

    let app = Router::new()
        .nest("/api/chat", chat_routes(chat_handlers))
        .nest("/api/forecast", forecast_routes(forecast_handlers))
        .nest("/api/auth", auth_routes(verifier))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.to_string()));

    tracing_subscriber::registry()
        .with(fmt::layer().compact())
        .with(filter)
        .init();
}
