use anyhow::Context;
use recipe_forge::{Catalog, Config, ForgeState, RecipeEngine, RecipeServer, RecipeStore};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> recipe_forge::error::Result<()> {
    // Logs go to stderr to avoid interfering with MCP protocol on stdout
    recipe_forge::tracing::init();

    let config = Config::load().context("Failed to load configuration")?;

    let catalog = match config.catalog_path() {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Bundled catalog is invalid")?,
    };
    tracing::info!("Loaded catalog with {} recipes", catalog.len());

    let store = match config.store_path() {
        Some(path) => RecipeStore::open(&path)
            .await
            .with_context(|| format!("Failed to open recipe store at {}", path.display()))?,
        None => {
            tracing::info!("Saved recipes are kept in memory only");
            RecipeStore::in_memory()
        }
    };

    let engine = RecipeEngine::with_options(Arc::new(catalog), config.engine);
    let state = Arc::new(ForgeState::new(engine, store, config.seed));

    tracing::info!("Starting recipe-forge MCP server");

    let server = RecipeServer::new(state);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}
