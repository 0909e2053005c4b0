// src/main.rs
//
// Argument-free batch step: read the catalog document from its configured
// location, annotate every record with a unique slug, rewrite the document,
// and print a human-readable summary.
use anyhow::Result;
use std::sync::Arc;
use tooldex_core::application::commands::SlugAnnotationService;
use tooldex_core::config::AppConfig;
use tooldex_core::domain::catalog::CatalogStore;
use tooldex_core::infrastructure::store::JsonCatalogStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let store: Arc<dyn CatalogStore> = Arc::new(JsonCatalogStore::new(config.catalog_path()));
    let service = SlugAnnotationService::new(store);

    let report = service.run()?;
    println!("{report}");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
