mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(fuelroute_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = fuelroute_db::PoolConfig::from_app_config(&config);
    let pool = fuelroute_db::connect_pool(&config.database_url, pool_config).await?;
    fuelroute_db::run_migrations(&pool).await?;

    let geocoder = Arc::new(fuelroute_trip::GeocodingClient::with_base_url(
        config.http_timeout_secs,
        &config.user_agent,
        &config.geocoder_base_url,
    )?);
    let router = Arc::new(fuelroute_trip::RoutingClient::with_base_url(
        config.http_timeout_secs,
        &config.user_agent,
        &config.osrm_base_url,
    )?);

    let app = build_app(AppState {
        pool,
        config: Arc::clone(&config),
        geocoder,
        router,
    });

    tracing::info!(addr = %config.bind_addr, "starting fuelroute server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
