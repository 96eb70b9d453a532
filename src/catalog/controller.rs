use axum::{
    body::HttpBody,
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::toggle_favorite_cmd::{ToggleFavoriteCommand, ToggleFavoriteCommandRequest, ToggleFavoriteCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};

pub fn router<B>(state: AppState) -> Router<(), B>
where
    B: HttpBody + Send + 'static,
{
    Router::new()
        .route("/catalog", get(list_books))
        .route("/catalog/search", get(search_books))
        .route("/catalog/favorites", get(list_favorites))
        .route("/catalog/:id", get(find_book_by_id))
        .route("/catalog/:id/favorite", post(toggle_favorite))
        .with_state(state)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service)
        .execute(ListBooksCommandRequest::new(false)).await?;
    Ok(Json(res))
}

pub(crate) async fn list_favorites(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service)
        .execute(ListBooksCommandRequest::new(true)).await?;
    Ok(Json(res))
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksCommandRequest>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let res = SearchBooksCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn toggle_favorite(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<ToggleFavoriteCommandResponse>, ServerError> {
    let req = ToggleFavoriteCommandRequest { book_id };
    let res = ToggleFavoriteCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}
