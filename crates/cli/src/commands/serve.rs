use anyhow::{Context, Result};
use flora_core::AppConfig;
use flora_http::{AppState, RouterOptions, create_router};
use flora_predict::PredictClient;
use std::sync::Arc;

pub(crate) async fn run(config: AppConfig, host: &str, port: Option<u16>) -> Result<()> {
    let storage = Arc::new(super::connect(&config).await?);
    let predictor = PredictClient::new(config.predict_api_url.clone())?;
    tracing::info!(endpoint = predictor.endpoint(), "prediction proxy configured");

    let state = Arc::new(AppState::new(
        storage,
        predictor,
        config.public_base_url.clone(),
        config.plant_list_limit,
    ));
    let router = create_router(state, RouterOptions::from(&config))
        .with_context(|| format!("invalid CORS origin {:?}", config.cors_origin))?;

    let addr = format!("{host}:{}", port.unwrap_or(config.port));
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
