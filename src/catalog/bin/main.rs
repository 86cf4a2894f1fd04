include!("../../lib.rs");
use std::net::SocketAddr;
use axum::{
    routing::{delete, get, post},
    Router,
};
use crate::catalog::controller::{add_book, get_stats, list_books, remove_book, search_books, AppState};
use crate::catalog::factory;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::trace::setup_tracing;

const DEFAULT_CATALOG_PATH: &str = "library.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();

    let path = std::env::var("PLM_CATALOG_PATH")
        .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
    let config = Configuration::new(path.as_str());
    let service = factory::create_catalog_service(&config, RepositoryStore::JsonFile).await;
    let state = AppState::new(service);

    let app = Router::new()
        .route("/catalog", post(add_book).get(list_books))
        .route("/catalog/search", get(search_books))
        .route("/catalog/stats", get(get_stats))
        .route("/catalog/:title", delete(remove_book))
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    tracing::info!("serving catalog {} on {}", config.catalog_path, addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
