use std::sync::Arc;

use movie_recommender::{
    api::{create_router, AppState},
    config::Config,
    services::providers::OmdbProvider,
    store,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Without both artifacts there is nothing to recommend from
    let store = match store::load_from_paths(&config.titles_path, &config.similarity_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(
                error = %e,
                titles_path = %config.titles_path,
                similarity_path = %config.similarity_path,
                "Model files not found or malformed"
            );
            return Err(e.into());
        }
    };

    let metadata = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));

    let state = AppState::new(store, metadata, config.recommendation_count);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
