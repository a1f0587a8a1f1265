//! Builders for the ports behind [`HttpState`].
//!
//! Every failure here is fatal: the server never starts with a partial
//! directory or a relay it cannot use in release builds.

use std::fmt::Display;
use std::io;
use std::sync::Arc;

use mockable::Env;
use tracing::{info, warn};

use cafe_directory::domain::CafeDirectory;
use cafe_directory::domain::ports::MailRelay;
use cafe_directory::inbound::http::state::HttpState;
use cafe_directory::outbound::mail::{
    SmtpMailRelay, SmtpRelayConfig, UnconfiguredMailRelay, mail_credentials_from_env,
};
use cafe_directory::outbound::persistence::{
    DbPool, DieselCafeRepository, PoolConfig, database_path_from_env, run_pending_migrations,
};
use cafe_directory::outbound::templates::MiniJinjaRenderer;
use cafe_directory::settings::{BuildMode, ServerSettings};

fn startup_error<E: Display>(stage: &'static str) -> impl FnOnce(E) -> io::Error {
    move |err| io::Error::other(format!("{stage}: {err}"))
}

/// Migrate the store and load the café snapshot served for the process
/// lifetime.
async fn build_cafe_directory<E: Env>(
    env: &E,
    settings: &ServerSettings,
) -> io::Result<CafeDirectory> {
    let path = database_path_from_env(env).map_err(startup_error("database location"))?;
    run_pending_migrations(&path)
        .await
        .map_err(startup_error("database migrations"))?;
    let pool_config = PoolConfig::new(path.as_str())
        .with_max_size(settings.db_max_connections())
        .with_connection_timeout(settings.db_connect_timeout());
    let pool = DbPool::new(pool_config)
        .await
        .map_err(startup_error("database pool"))?;
    let cafes = CafeDirectory::load(Arc::new(DieselCafeRepository::new(pool)))
        .await
        .map_err(startup_error("café snapshot"))?;
    info!(path = %path, cafes = cafes.all().len(), "café directory loaded");
    Ok(cafes)
}

fn build_mail_relay<E: Env>(
    env: &E,
    settings: &ServerSettings,
    mode: BuildMode,
) -> io::Result<Arc<dyn MailRelay>> {
    let Some(credentials) =
        mail_credentials_from_env(env, mode).map_err(startup_error("mail credentials"))?
    else {
        warn!("contact and suggestion forms will report delivery failures");
        return Ok(Arc::new(UnconfiguredMailRelay));
    };
    let config = SmtpRelayConfig {
        host: settings.smtp_host().to_owned(),
        port: settings.smtp_port(),
        timeout: settings.smtp_timeout(),
    };
    let relay = SmtpMailRelay::new(&config, &credentials).map_err(startup_error("mail relay"))?;
    info!(host = %config.host, port = config.port, "SMTP relay configured");
    Ok(Arc::new(relay))
}

/// Build HTTP state from the environment and loaded settings.
pub(crate) async fn build_http_state<E: Env>(
    env: &E,
    settings: &ServerSettings,
    mode: BuildMode,
) -> io::Result<HttpState> {
    let cafes = build_cafe_directory(env, settings).await?;
    let mail = build_mail_relay(env, settings, mode)?;
    let renderer = MiniJinjaRenderer::new().map_err(startup_error("page templates"))?;
    Ok(HttpState::new(Arc::new(cafes), mail, Arc::new(renderer)))
}
