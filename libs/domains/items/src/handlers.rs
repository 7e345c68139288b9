use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::errors::responses::{
    InvalidIdentifierResponse, InvalidJsonResponse, NotFoundResponse, ServiceUnavailableResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::codec::ItemIdPath;
use crate::error::ItemResult;
use crate::models::{Item, ItemPayload};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// Mount point of the items router
pub const ITEMS_PATH: &str = "/items";

/// Body returned by a successful delete
pub const DELETE_CONFIRMATION: &str = "Item deleted";

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(Item, ItemPayload),
        responses(
            NotFoundResponse,
            InvalidIdentifierResponse,
            InvalidJsonResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Items", description = "Item management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "Every stored item", body = Vec<Item>),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item created with a store-assigned id", body = Item),
        (status = 400, response = InvalidJsonResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    body: Bytes,
) -> ItemResult<Json<Item>> {
    let input = ItemPayload::from_json(&body)?;
    let item = service.create_item(input).await?;
    Ok(Json(item))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID (24 hex digits)")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = InvalidIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ItemIdPath(id): ItemIdPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Replace an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID (24 hex digits)")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item as stored", body = Item),
        (status = 400, response = InvalidIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ItemIdPath(id): ItemIdPath,
    body: Bytes,
) -> ItemResult<Json<Item>> {
    let input = ItemPayload::from_json(&body)?;
    let item = service.update_item(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID (24 hex digits)")
    ),
    responses(
        (status = 200, description = "Item deleted", body = String, content_type = "text/plain"),
        (status = 400, response = InvalidIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ItemIdPath(id): ItemIdPath,
) -> ItemResult<impl IntoResponse> {
    service.delete_item(id).await?;
    Ok((StatusCode::OK, DELETE_CONFIRMATION))
}
