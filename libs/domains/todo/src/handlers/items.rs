use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_helpers::AppError;
use grpc_client::metadata::request_with_headers;
use rpc::todo::v1 as proto;

use super::{GatewayState, rpc_error};
use crate::conversions::{items_from_proto, required};
use crate::models::{
    CreateTodoItemBody, SearchTodoItemsParams, TodoItem, TodoItemList, UpdateTodoItemBody,
};

/// Create a todo item owned by the caller
#[utoipa::path(
    post,
    path = "/v1/items",
    tag = "items",
    request_body = CreateTodoItemBody,
    responses(
        (status = 201, description = "Item created", body = TodoItem),
        (status = 400, description = "Invalid id or missing title", body = axum_helpers::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Referenced project not found"),
        (status = 409, description = "Item id already exists")
    ),
    security(("bearer" = []))
)]
pub async fn create_item(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTodoItemBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;
    let message = proto::CreateTodoItemRequest {
        id: body.id,
        title: body.title,
        project_id: body.project_id,
    };

    let response = state
        .todo
        .create_todo_item(request_with_headers(message, &headers))
        .await
        .map_err(rpc_error)?
        .into_inner();

    let item = TodoItem::try_from(required(response.item, "item")?)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Search the caller's items
#[utoipa::path(
    get,
    path = "/v1/items",
    tag = "items",
    params(SearchTodoItemsParams),
    responses(
        (status = 200, description = "Matching items, unordered", body = TodoItemList),
        (status = 400, description = "Malformed id or filter"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer" = []))
)]
pub async fn search_items(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    params: Result<Query<SearchTodoItemsParams>, QueryRejection>,
) -> Result<Json<TodoItemList>, AppError> {
    let Query(params) = params?;
    let project_ids = params.project_id_list();
    let done = proto::DoneFilter::from(params.done.unwrap_or_default());
    let message = proto::SearchTodoItemsRequest {
        id: params.id,
        title: params.title,
        done: done as i32,
        project_ids,
    };

    let response = state
        .todo
        .search_todo_items(request_with_headers(message, &headers))
        .await
        .map_err(rpc_error)?
        .into_inner();

    Ok(Json(TodoItemList {
        items: items_from_proto(response.items)?,
    }))
}

/// List the caller's items that are not done
#[utoipa::path(
    get,
    path = "/v1/items/undone",
    tag = "items",
    responses(
        (status = 200, description = "Undone items, unordered", body = TodoItemList),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer" = []))
)]
pub async fn list_undone_items(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
) -> Result<Json<TodoItemList>, AppError> {
    let response = state
        .todo
        .list_undone_todo_items(request_with_headers(
            proto::ListUndoneTodoItemsRequest {},
            &headers,
        ))
        .await
        .map_err(rpc_error)?
        .into_inner();

    Ok(Json(TodoItemList {
        items: items_from_proto(response.items)?,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = TodoItem),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Item not found")
    ),
    security(("bearer" = []))
)]
pub async fn get_item(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<TodoItem>, AppError> {
    let response = state
        .todo
        .get_todo_item(request_with_headers(proto::GetTodoItemRequest { id }, &headers))
        .await
        .map_err(rpc_error)?
        .into_inner();

    Ok(Json(TodoItem::try_from(required(response.item, "item")?)?))
}

/// Update title and done flag
#[utoipa::path(
    put,
    path = "/v1/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item id")),
    request_body = UpdateTodoItemBody,
    responses(
        (status = 200, description = "Item updated", body = TodoItem),
        (status = 400, description = "Malformed id or empty title"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Item not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_item(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoItemBody>, JsonRejection>,
) -> Result<Json<TodoItem>, AppError> {
    let Json(body) = payload?;
    let message = proto::UpdateTodoItemRequest {
        id,
        title: body.title,
        is_done: body.is_done,
    };

    let response = state
        .todo
        .update_todo_item(request_with_headers(message, &headers))
        .await
        .map_err(rpc_error)?
        .into_inner();

    Ok(Json(TodoItem::try_from(required(response.item, "item")?)?))
}

#[utoipa::path(
    delete,
    path = "/v1/items/{id}",
    tag = "items",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Item not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_item(
    State(mut state): State<GatewayState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .todo
        .delete_todo_item(request_with_headers(
            proto::DeleteTodoItemRequest { id },
            &headers,
        ))
        .await
        .map_err(rpc_error)?;

    Ok(StatusCode::NO_CONTENT)
}
