use document_service::config::DocumentConfig;
use document_service::startup::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DocumentConfig::load()?;
    init_tracing("document-service", &config.common.log_level);
    init_metrics()?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
