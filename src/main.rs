use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use storefront_bot::bot::Dispatcher;
use storefront_bot::catalog::Catalog;
use storefront_bot::config::Config;
use storefront_bot::gateway::CloudApiGateway;
use storefront_bot::localization::LocalizationManager;
use storefront_bot::telemetry;
use storefront_bot::webhook::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    telemetry::init();

    info!("Starting storefront WhatsApp bot");

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog from file");
            Catalog::from_file(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?
        }
        None => Catalog::builtin().context("built-in catalog is invalid")?,
    };
    info!(
        categories = catalog.list_categories().len(),
        faq_sections = catalog.faq_sections().len(),
        "Catalog loaded"
    );

    let l10n = LocalizationManager::new(&config.locale)?;
    info!(language = l10n.language(), "Localization initialized");

    let gateway = CloudApiGateway::new(&config);
    info!(endpoint = gateway.endpoint(), "Messaging gateway configured");

    let state = AppState::new(
        Dispatcher::new(catalog, l10n),
        Arc::new(gateway),
        &config.verify_token,
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    info!(address = %listener.local_addr()?, "Bot listening");

    axum::serve(listener, webhook::router(state))
        .with_graceful_shutdown(webhook::shutdown_on(tokio::signal::ctrl_c()))
        .await?;

    Ok(())
}
