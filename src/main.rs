use anyhow::Result;
use tracing::info;
use translation_desk::config::Config;
use translation_desk::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_desk=info".parse()?),
        )
        .init();

    info!("Starting translation desk");

    let config = Config::from_env()?;
    let app = Application::build(config).await?;

    app.run_until_stopped().await?;
    Ok(())
}
