use crate::{ApiError, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use todo_types::{DeleteConfirmation, Item, ItemId, ItemUpdate, NewItem};
use tracing::debug;

pub(crate) async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list().await?;
    debug!("Listing {} todos", items.len());
    Ok(Json(items))
}

pub(crate) async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(new) = body?;
    let item = state.store.create(new).await?;
    debug!("Created todo {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

pub(crate) async fn replace_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ItemUpdate>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let id = ItemId::parse(&id)?;
    let Json(update) = body?;
    let item = state.store.replace(id, update).await?;
    debug!("Replaced todo {}", item.id);
    Ok(Json(item))
}

pub(crate) async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let id = ItemId::parse(&id)?;
    let outcome = state.store.delete(id).await?;
    debug!("Delete of todo {}: {:?}", id, outcome);
    Ok(Json(DeleteConfirmation::new(outcome.was_deleted())))
}
