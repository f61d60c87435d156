use tracing_subscriber::{EnvFilter, fmt};

use hotels_api::shared::infrastructure::postgres;
use hotels_api::shell::config::AppConfig;
use hotels_api::shell::http::router;
use hotels_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let state = match &config.database {
        Some(database) => AppState::postgres(postgres::connect(database).await?),
        None => {
            tracing::warn!("DATABASE_URL is not set, serving from empty in memory stores");
            AppState::in_memory()
        }
    };

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Hotels API: http://{}/hotels", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
