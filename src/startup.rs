use crate::client::ApiClient;
use crate::config::Config;
use crate::notification::ToastOptions;
use crate::proxy::ProxyTarget;
use crate::router::build_router;
use crate::services::{DocumentService, TranslatorService};
use crate::ui::UiSettings;
use anyhow::{Context, Result};
use std::future::IntoFuture;
use tokio::net::TcpListener;
use tracing::info;

/// Shared state handed to every route.
#[derive(Debug, Clone)]
pub struct AppState {
    pub ui: UiSettings,
    pub toast: ToastOptions,
    pub documents: DocumentService,
    pub translators: TranslatorService,
    pub proxy: ProxyTarget,
}

impl AppState {
    /// UI settings, then notification options, then the services sharing
    /// one API client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let ui = UiSettings::default();
        let toast = ToastOptions::default();

        let client = ApiClient::new(&config.api_base_url)
            .with_context(|| format!("Invalid API_BASE_URL: {}", config.api_base_url))?;

        Ok(Self {
            ui,
            toast,
            documents: DocumentService::new(client.clone()),
            translators: TranslatorService::new(client),
            proxy: ProxyTarget::new(config.proxy_target.clone()),
        })
    }
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build state, mount the router and bind the listener.
    pub async fn build(config: Config) -> Result<Self> {
        let state = AppState::from_config(&config)?;
        info!("API base URL: {}", config.api_base_url);

        let app = build_router(state);

        let address = config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind to address {}", address))?;
        let port = listener.local_addr()?.port();

        info!("Listening on {}:{}", config.host, port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
