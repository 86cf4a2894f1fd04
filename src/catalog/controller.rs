use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_stats_cmd::{GetStatsCommand, GetStatsCommandRequest, GetStatsCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::controller::{json_to_server_error, ServerError};

// AppState carries the one service instance every handler shares; the bin
// constructs it at startup instead of reaching for a global.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            service,
        }
    }
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { title };
    let res = RemoveBookCommand::new(state.service).execute(req).await?;
    Ok(Json(res))
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    q: String,
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let req = SearchBooksCommandRequest { query: params.q };
    let res = SearchBooksCommand::new(state.service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.service).execute(ListBooksCommandRequest::new()).await?;
    Ok(Json(res))
}

pub(crate) async fn get_stats(
    State(state): State<AppState>) -> Result<Json<GetStatsCommandResponse>, ServerError> {
    let res = GetStatsCommand::new(state.service).execute(GetStatsCommandRequest::new()).await?;
    Ok(Json(res))
}
