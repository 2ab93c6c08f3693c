use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sg_api::app::create_app;
use sg_api::routes::auth::AppState;
use sg_core::services::token::{TokenService, TokenServiceConfig};
use sg_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Configuration defects (a missing signing secret in particular) must
    // abort startup, not fall back to a default key.
    let config = AppConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.logging.colored)
        .init();

    info!(environment = %config.environment, "Starting Session Gate API server");

    let token_config = TokenServiceConfig::new(config.auth.jwt_secret())
        .with_ttl_days(config.auth.jwt.token_ttl_days);
    let token_service = TokenService::new(token_config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let app_state = web::Data::new(AppState {
        token_service: Arc::new(token_service),
        session: config.auth.session.clone(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
