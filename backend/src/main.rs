//! Café directory entry-point: loads settings and secrets, opens the café
//! store and serves the site.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cafe_directory::inbound::http::health::HealthState;
use cafe_directory::inbound::http::session_config::fingerprint::key_fingerprint;
use cafe_directory::inbound::http::session_config::session_settings_from_env;
use cafe_directory::settings::{BuildMode, ServerSettings};
use server::{ServerConfig, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let mode = BuildMode::from_debug_assertions();
    let env = DefaultEnv::new();

    let session = session_settings_from_env(&env, mode, settings.cookie_secure)
        .map_err(|e| std::io::Error::other(format!("invalid session configuration: {e}")))?;
    info!(
        fingerprint = %key_fingerprint(&session.key),
        ephemeral = session.ephemeral,
        "session key loaded"
    );

    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let http_state = build_http_state(&env, &settings, mode).await?;
    let config = ServerConfig::new(session, bind_addr).with_delete_route(settings.enable_delete);
    if settings.enable_delete {
        warn!("administrative delete route enabled");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, http_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
