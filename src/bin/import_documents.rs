//! Bulk import binary - uploads one file for server-side document ingestion
//!
//! Usage:
//!   cargo run --bin import -- data/documents.csv
//!   cargo run --bin import -- data/documents.json application/json
//!
//! Optional environment variables:
//! - API_BASE_URL (defaults to http://localhost:8080/api/v1/)

use anyhow::{bail, Context, Result};
use tracing::info;
use translation_desk::config::Config;
use translation_desk::models::UploadFile;
use translation_desk::{ApiClient, DocumentService};

const DEFAULT_CONTENT_TYPE: &str = "text/csv";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_desk=info".parse()?)
                .add_directive("import=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        bail!("Usage: import <file> [content-type]");
    };
    let content_type = args
        .get(1)
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONTENT_TYPE);

    let config = Config::from_env()?;
    let client = ApiClient::new(&config.api_base_url)
        .with_context(|| format!("Invalid API_BASE_URL: {}", config.api_base_url))?;
    let documents = DocumentService::new(client);

    let file = UploadFile::from_path(path, content_type)
        .await
        .with_context(|| format!("Failed to read {}", path))?;

    info!(
        "Uploading {} ({} bytes, {}) to {}",
        file.file_name,
        file.bytes.len(),
        content_type,
        config.api_base_url
    );

    documents
        .insert_batch_documents(file)
        .await
        .context("Batch import failed")?;

    info!("✓ Batch import accepted");
    Ok(())
}
