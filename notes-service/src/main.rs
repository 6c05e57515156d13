use notes_service::config::NotesConfig;
use notes_service::startup::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NotesConfig::load()?;
    init_tracing("notes-service", &config.common.log_level);
    init_metrics()?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
