use anyhow::Result;
use flora_core::AppConfig;

pub(crate) async fn run(config: &AppConfig) -> Result<()> {
    let storage = super::connect(config).await?;
    storage.ensure_schema().await?;
    tracing::info!("schema is ready");
    Ok(())
}
